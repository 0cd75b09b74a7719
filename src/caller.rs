// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Caller identification.

[Logger::begin](crate::Logger::begin) names the operation after the function that called it.
We find that function by walking the stack from [caller_name] and resolving the symbol a
fixed number of frames up.

This is a convenience.  Whenever the stack can't be inspected (no unwind info, stripped
symbols, an inlined frame, or a `wasm32` target) the name is the empty string and the
logger simply skips the segment.
*/

/**
Returns the simple name of the function `depth` frames above this one.

`depth == 1` is the direct caller of `caller_name`; `depth == 2` is that function's caller.
Returns `""` if the frame can't be found or resolved.
*/
#[inline(never)]
pub fn caller_name(depth: usize) -> String {
    #[cfg(not(target_arch = "wasm32"))]
    {
        resolve(depth).unwrap_or_default()
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = depth;
        String::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve(depth: usize) -> Option<String> {
    if depth == 0 {
        return None;
    }
    let this = caller_name as *const () as usize;
    let mut seen_self = false;
    let mut remaining = depth;
    let mut target: Option<backtrace::Frame> = None;
    backtrace::trace(|frame| {
        if !seen_self {
            seen_self = frame.symbol_address() as usize == this;
            return true;
        }
        remaining -= 1;
        if remaining == 0 {
            target = Some(frame.clone());
            return false;
        }
        true
    });

    let frame = target?;
    let mut name: Option<String> = None;
    //inlined functions resolve to several symbols, innermost first
    backtrace::resolve_frame(&frame, |symbol| {
        if name.is_none() {
            if let Some(symbol_name) = symbol.name() {
                name = Some(format!("{:#}", symbol_name));
            }
        }
    });
    let name = name?;
    let simple = simple_name(&name);
    if simple.is_empty() {
        None
    } else {
        Some(simple.to_string())
    }
}

fn is_symbol_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

/**
Strips the module path from a symbol, keeping only the function name.

Closure markers, generic arguments and symbol hashes are skipped, so a closure inside
`app::main` is reported as `main`.

```
use prefixlog::caller::simple_name;

assert_eq!(simple_name("app::handlers::serve_http"), "serve_http");
assert_eq!(simple_name("app::main::{{closure}}"), "main");
assert_eq!(simple_name("<app::Server as app::Handler>::handle"), "handle");
assert_eq!(simple_name("standalone"), "standalone");
```
*/
pub fn simple_name(path: &str) -> &str {
    path.rsplit("::")
        .find(|segment| {
            !segment.is_empty()
                && !segment.starts_with('{')
                && !segment.starts_with('<')
                && !is_symbol_hash(segment)
        })
        .map(|segment| segment.trim_end_matches('>'))
        .unwrap_or("")
}

/// Marker function name used by the [`begin!`](crate::begin) macro.
#[doc(hidden)]
pub const HERE_MARKER: &str = "__prefixlog_here";

/**
Recovers the enclosing function from the type name of a marker function declared inside it.

Used by the [`begin!`](crate::begin) macro, which works even where stack walking doesn't.
*/
#[doc(hidden)]
pub fn enclosing_function(marker_path: &str) -> &str {
    let path = marker_path
        .strip_suffix(HERE_MARKER)
        .and_then(|p| p.strip_suffix("::"))
        .unwrap_or(marker_path);
    simple_name(path)
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}
