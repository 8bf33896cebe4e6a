//! Procedural macros for nav-nexus route declarations.
//!
//! This crate provides the `#[routes]` attribute, which turns a closed route
//! enum into a `nav_nexus::RouteDescriptor` with a generated tag enum.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Fields, Ident, ItemEnum, Type};

/// Attribute macro for declaring the closed set of routes of an application.
///
/// # Usage
///
/// ```ignore
/// #[routes]
/// #[derive(Debug, Clone, PartialEq)]
/// pub enum AppRoute {
///     Home(HomeRoute),
///     Detail(DetailRoute),
/// }
/// ```
///
/// Every variant must carry exactly one argument type, and no two variants
/// may share one. The macro generates:
/// - `enum AppRouteKind { Home, Detail }` with `ALL`, `name()`, `Display`
///   and case-insensitive `FromStr`
/// - `impl RouteDescriptor for AppRoute`
/// - `impl RouteArgs<AppRoute>` and `impl From<_> for AppRoute` for each
///   argument type
#[proc_macro_attribute]
pub fn routes(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(Span::call_site(), "#[routes] takes no arguments")
            .to_compile_error()
            .into();
    }

    let input = parse_macro_input!(item as ItemEnum);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

struct RouteVariant<'a> {
    ident: &'a Ident,
    args: &'a Type,
}

fn route_variants(input: &ItemEnum) -> syn::Result<Vec<RouteVariant<'_>>> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "route enums cannot be generic",
        ));
    }
    if input.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "route enum needs at least one variant",
        ));
    }

    let mut seen: Vec<String> = Vec::new();
    input
        .variants
        .iter()
        .map(|variant| {
            let args = match &variant.fields {
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
                _ => {
                    return Err(syn::Error::new_spanned(
                        variant,
                        "route variants must carry exactly one argument type, e.g. `Home(HomeRoute)`",
                    ));
                }
            };

            let key = quote!(#args).to_string();
            if seen.contains(&key) {
                return Err(syn::Error::new_spanned(
                    args,
                    "each route variant needs its own argument type",
                ));
            }
            seen.push(key);

            Ok(RouteVariant {
                ident: &variant.ident,
                args,
            })
        })
        .collect()
}

fn expand(input: &ItemEnum) -> syn::Result<TokenStream2> {
    let variants = route_variants(input)?;

    let vis = &input.vis;
    let name = &input.ident;
    let kind = format_ident!("{}Kind", name);
    let idents: Vec<&Ident> = variants.iter().map(|v| v.ident).collect();
    let names: Vec<String> = idents.iter().map(|ident| ident.to_string()).collect();
    let kind_doc = format!("Tag of a [`{name}`] variant, used as its registry key.");

    let args_impls = variants.iter().map(|variant| {
        let ident = variant.ident;
        let args = variant.args;
        quote! {
            impl ::nav_nexus::RouteArgs<#name> for #args {
                const KIND: #kind = #kind::#ident;

                #[allow(unreachable_patterns)]
                fn from_route(route: &#name) -> ::core::option::Option<&Self> {
                    match route {
                        #name::#ident(args) => ::core::option::Option::Some(args),
                        _ => ::core::option::Option::None,
                    }
                }

                fn into_route(self) -> #name {
                    #name::#ident(self)
                }
            }

            impl ::core::convert::From<#args> for #name {
                fn from(args: #args) -> Self {
                    #name::#ident(args)
                }
            }
        }
    });

    Ok(quote! {
        #input

        #[doc = #kind_doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #vis enum #kind {
            #(#idents),*
        }

        impl #kind {
            /// Every tag, in declaration order.
            pub const ALL: &'static [#kind] = &[#(#kind::#idents),*];

            /// The variant name as declared.
            pub fn name(&self) -> &'static str {
                match self {
                    #(#kind::#idents => #names),*
                }
            }
        }

        impl ::core::fmt::Display for #kind {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::core::str::FromStr for #kind {
            type Err = ::nav_nexus::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                #kind::ALL
                    .iter()
                    .copied()
                    .find(|kind| kind.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ::nav_nexus::Error::UnknownRoute {
                        name: s.to_string(),
                        available: [#(#names),*].join(", "),
                    })
            }
        }

        impl ::nav_nexus::RouteDescriptor for #name {
            type Kind = #kind;

            fn kind(&self) -> #kind {
                match self {
                    #(#name::#idents(_) => #kind::#idents),*
                }
            }

            fn kinds() -> &'static [#kind] {
                #kind::ALL
            }
        }

        #(#args_impls)*
    })
}
