// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Procedural macros for declaring picotest tests and suites.
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{Error, Expr, ExprMacro, Ident, ItemFn, Macro, Stmt, StmtMacro, parse_macro_input};

/// Marks a function as a unit test.
///
/// # Example
///
/// ```rust,ignore
/// use picotest::{check, check_eq, def_test};
///
/// #[def_test]
/// fn test_addition() {
///     let a = 2 + 2;
///     check_eq!(a, 4);
///     check!(a > 3);
/// }
///
/// assert!(test_addition().is_pass());
/// ```
///
/// The function becomes `fn name() -> picotest::TestResult`. Without a return
/// type the body is wrapped to return `TestResult::Pass` once it runs to the
/// end; `check!` returns early with the first failure. A function with a
/// return type (`TestResult`, `Result<(), AssertionFailure>`, ...) keeps its
/// body and its value is converted with `Into<TestResult>`.
#[proc_macro_attribute]
pub fn def_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return Error::new(
            Span::call_site(),
            "expect an empty attribute: `#[def_test]`",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as ItemFn);
    generate_function_test(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Generate test code for a single function
fn generate_function_test(input: ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    check_plain_signature(&input, "test")?;

    let fn_name = &input.sig.ident;
    let fn_attrs = &input.attrs;
    let fn_vis = &input.vis;
    let block = &input.block;

    let output = match &input.sig.output {
        syn::ReturnType::Default => {
            // The body is kept inline so `check!` can `return` from it
            quote! {
                #(#fn_attrs)*
                #[allow(unreachable_code)]
                #fn_vis fn #fn_name() -> picotest::TestResult {
                    #block
                    picotest::TestResult::Pass
                }
            }
        }
        ret @ syn::ReturnType::Type(..) => {
            quote! {
                #(#fn_attrs)*
                #fn_vis fn #fn_name() -> picotest::TestResult {
                    fn __picotest_body() #ret #block
                    ::core::convert::Into::into(__picotest_body())
                }
            }
        }
    };

    Ok(output)
}

/// Declares a named suite from an ordered list of tests.
///
/// # Example
///
/// ```rust,ignore
/// use picotest::{Suite, check, def_suite, def_test};
///
/// #[def_test]
/// fn adds() {
///     check!(2 + 2 == 4);
/// }
///
/// #[def_test]
/// fn subtracts() {
///     check!(4 - 2 == 2);
/// }
///
/// #[def_suite]
/// fn math() {
///     run_test!(adds);
///     run_test!(subtracts);
/// }
///
/// assert_eq!(MATH.name(), "math");
/// assert_eq!(MATH.tests.len(), 2);
/// ```
///
/// The function is replaced by a `static` of type `picotest::SuiteDescriptor`
/// named after the function in upper case, with the function's visibility.
/// The suite keeps the function's name; each test keeps the name of its
/// function. The body may only contain `run_test!(<test fn>);` statements.
#[proc_macro_attribute]
pub fn def_suite(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return Error::new(
            Span::call_site(),
            "expect an empty attribute: `#[def_suite]`",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as ItemFn);
    generate_suite(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn generate_suite(input: ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    check_plain_signature(&input, "suite")?;
    if let syn::ReturnType::Type(..) = input.sig.output {
        return Err(Error::new_spanned(
            &input.sig.output,
            "expect no return value for a suite",
        ));
    }

    let suite_name = &input.sig.ident;
    let suite_name_str = suite_name.to_string();
    let static_name = format_ident!("{}", suite_name_str.to_uppercase());
    let attrs = &input.attrs;
    let vis = &input.vis;

    let tests = input
        .block
        .stmts
        .iter()
        .map(run_test_target)
        .collect::<syn::Result<Vec<_>>>()?;
    let test_names = tests.iter().map(|t| t.to_string());

    Ok(quote! {
        #(#attrs)*
        #vis static #static_name: picotest::SuiteDescriptor = picotest::SuiteDescriptor::new(
            #suite_name_str,
            &[
                #(picotest::TestDescriptor::new(#test_names, #tests)),*
            ],
        );
    })
}

/// Extract `name` from a `run_test!(name);` statement.
fn run_test_target(stmt: &Stmt) -> syn::Result<Ident> {
    let mac: &Macro = match stmt {
        Stmt::Macro(StmtMacro { mac, .. }) => mac,
        Stmt::Expr(Expr::Macro(ExprMacro { mac, .. }), _) => mac,
        other => {
            return Err(Error::new_spanned(
                other,
                "a suite body may only contain `run_test!(<test>);` statements",
            ));
        }
    };

    if !mac.path.is_ident("run_test") {
        return Err(Error::new_spanned(
            &mac.path,
            "expect `run_test!(<test>)` inside a suite",
        ));
    }
    mac.parse_body::<Ident>()
}

/// Tests and suites take no arguments and cannot be async, const or generic.
fn check_plain_signature(input: &ItemFn, what: &str) -> syn::Result<()> {
    let sig = &input.sig;
    if !sig.inputs.is_empty() {
        return Err(Error::new_spanned(
            &sig.inputs,
            format!("expect no input arguments for a {what}"),
        ));
    }
    if sig.asyncness.is_some() || sig.constness.is_some() {
        return Err(Error::new_spanned(
            sig,
            format!("a {what} must be a plain function"),
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &sig.generics,
            format!("a {what} cannot be generic"),
        ));
    }
    Ok(())
}
