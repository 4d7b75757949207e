//! Attribute macros for the Iterum retry crate.
//!
//! Both macros rewrite an `async fn` into a synchronous one whose body
//! is driven to completion by `::iterum::Runtime::block_on`.

use proc_macro::{Delimiter, Group, TokenStream, TokenTree};

#[proc_macro_attribute]
pub fn main(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return compile_error("#[iterum::main] does not take arguments");
    }

    match wrap_body(item) {
        Ok(tokens) => tokens.into_iter().collect(),
        Err(msg) => compile_error(&format!("#[iterum::main] {msg}")),
    }
}

#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return compile_error("#[iterum::test] does not take arguments");
    }

    let tokens = match wrap_body(item) {
        Ok(tokens) => tokens,
        Err(msg) => return compile_error(&format!("#[iterum::test] {msg}")),
    };

    let test_attr: TokenStream = "#[::core::prelude::v1::test]".parse().unwrap();
    let mut result: Vec<TokenTree> = test_attr.into_iter().collect();
    result.extend(tokens);

    result.into_iter().collect()
}

/// Drops the `async` keyword and moves the function body into a
/// `block_on` call. The body's value is returned as-is, so functions
/// returning `Result` keep working.
fn wrap_body(item: TokenStream) -> Result<Vec<TokenTree>, String> {
    const NOT_ASYNC_FN: &str = "expects an `async fn` with a body";

    let mut tokens: Vec<TokenTree> = item.into_iter().collect();

    let async_pos = tokens
        .iter()
        .position(|t| matches!(t, TokenTree::Ident(id) if id.to_string() == "async"))
        .ok_or(NOT_ASYNC_FN)?;
    tokens.remove(async_pos);

    let pos = tokens
        .iter()
        .rposition(|t| matches!(t, TokenTree::Group(g) if g.delimiter() == Delimiter::Brace))
        .ok_or(NOT_ASYNC_FN)?;

    let block = match &tokens[pos] {
        TokenTree::Group(g) => g.stream().to_string(),
        _ => return Err(NOT_ASYNC_FN.to_string()),
    };

    let new_block = format!(
        "{{
            let mut runtime = ::iterum::Runtime::new();
            runtime
                .block_on(async move {{
                    {}
                }})
        }}",
        block
    );

    let stream = new_block
        .parse::<TokenStream>()
        .map_err(|err| format!("macro error: {err}"))?;
    tokens[pos] = TokenTree::Group(Group::new(Delimiter::Brace, stream));

    Ok(tokens)
}

fn compile_error(msg: &str) -> TokenStream {
    format!("compile_error!({:?});", msg).parse().unwrap()
}
