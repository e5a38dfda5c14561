use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{parse_macro_input, spanned::Spanned, ItemFn};

/// Runs an `async fn main` to completion on [`async_seq::runtime::block_on`].
///
/// [`async_seq::runtime::block_on`]: https://docs.rs/async-seq/latest/async_seq/runtime/fn.block_on.html
#[proc_macro_attribute]
pub fn attr_macro_main(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    if let Err(err) = check_signature(&input, "main") {
        return err;
    }

    if input.sig.ident != "main" {
        return quote_spanned! { input.sig.ident.span()=>
            compile_error!("only `async fn main` can be used for #[async_seq::main]");
        }
        .into();
    }

    let attrs = input.attrs;
    let output = input.sig.output;
    let block = input.block;
    quote! {
        #(#attrs)*
        pub fn main() #output {
            async fn __run() #output {
                #block
            }

            ::async_seq::runtime::block_on(__run())
        }
    }
    .into()
}

/// Turns an `async fn` into a `#[test]` driven by the crate's executor.
///
/// Attributes such as `#[should_panic]` or `#[ignore]` apply to the
/// generated test.
#[proc_macro_attribute]
pub fn attr_macro_test(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    if let Err(err) = check_signature(&input, "test") {
        return err;
    }

    let name = input.sig.ident;
    let attrs = input.attrs;
    let output = input.sig.output;
    let block = input.block;
    quote! {
        #[::core::prelude::v1::test]
        #(#attrs)*
        pub fn #name() #output {
            async fn __run() #output {
                #block
            }

            ::async_seq::runtime::block_on(__run())
        }
    }
    .into()
}

/// Rejects signatures the executor cannot drive: non-async functions,
/// arguments, and generic parameters.
fn check_signature(input: &ItemFn, attr: &str) -> Result<(), TokenStream> {
    let sig = &input.sig;
    if sig.asyncness.is_none() {
        let message = format!("#[async_seq::{attr}] requires an `async fn`");
        return Err(quote_spanned! { sig.fn_token.span()=>
            compile_error!(#message);
        }
        .into());
    }

    if !sig.inputs.is_empty() {
        let message = format!("#[async_seq::{attr}] functions cannot take arguments");
        return Err(quote_spanned! { sig.inputs.span()=>
            compile_error!(#message);
        }
        .into());
    }

    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        let message = format!("#[async_seq::{attr}] functions cannot be generic");
        return Err(quote_spanned! { sig.generics.span()=>
            compile_error!(#message);
        }
        .into());
    }
    Ok(())
}
