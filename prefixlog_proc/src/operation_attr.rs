// SPDX-License-Identifier: MIT OR Apache-2.0
use proc_macro::{Delimiter, TokenStream, TokenTree};

fn compile_error(message: &str) -> TokenStream {
    format!("compile_error!({:?});", message)
        .parse()
        .unwrap_or_default()
}

/// Implementation of the `#[operation]` attribute macro.
///
/// Finds the function name and body, then replaces the body with one that holds an
/// `OperationGuard` for the original body's duration.
pub fn operation_attr_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    if attr.is_empty() {
        return compile_error("#[operation] requires a logger, e.g. #[operation(logger)]");
    }
    let mut tokens: Vec<TokenTree> = item.into_iter().collect();

    let mut fn_name: Option<String> = None;
    let mut body_idx: Option<usize> = None;

    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            TokenTree::Ident(ident) if fn_name.is_none() && ident.to_string() == "fn" => {
                if let Some(TokenTree::Ident(name)) = tokens.get(i + 1) {
                    fn_name = Some(name.to_string());
                }
            }
            //the body is the last brace group
            TokenTree::Group(g) if fn_name.is_some() && g.delimiter() == Delimiter::Brace => {
                body_idx = Some(i);
            }
            _ => {}
        }
        i += 1;
    }

    let Some(fn_name) = fn_name else {
        return compile_error("#[operation] can only be applied to functions");
    };
    let Some(body_idx) = body_idx else {
        return compile_error("#[operation] requires a function with a body");
    };
    let original_body = match &tokens[body_idx] {
        TokenTree::Group(g) => g.stream(),
        _ => return compile_error("expected function body"),
    };
    let fn_name = fn_name.strip_prefix("r#").unwrap_or(&fn_name).to_string();

    let new_body_src = format!(
        r#"{{
            let _prefixlog_operation = ({logger}).operation("{fn_name}");
            {{ {original_body} }}
        }}"#,
        logger = attr,
        fn_name = fn_name,
        original_body = original_body
    );

    let new_body: TokenStream = match new_body_src.parse() {
        Ok(body) => body,
        Err(_) => return compile_error("#[operation] could not rewrite the function body"),
    };
    let Some(new_body_group) = new_body.into_iter().next() else {
        return compile_error("#[operation] could not rewrite the function body");
    };

    tokens[body_idx] = new_body_group;
    tokens.into_iter().collect()
}
