//! Derive macro implementation for parsenv

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `EnvConfig` derive macro
///
/// Implements `parsenv::EnvConfig` for a struct with named fields.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env("directive")]`: a `;`-separated list of `-`, `required`,
///   `name=NAME` and `default=VALUE`
///
/// Every field that is not ignored must implement `parsenv::Scalar`.
/// Malformed directives are reported as compile errors.
///
/// # Example
///
/// See the `parsenv` crate documentation for usage examples.
#[proc_macro_derive(EnvConfig, attributes(env))]
pub fn derive_env_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    if let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident("env")) {
        return Err(syn::Error::new_spanned(
            attr,
            "env attributes are only supported on fields",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvConfig only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvConfig only supports structs",
            ));
        }
    };

    let mut descriptors = Vec::new();
    let mut assignments = Vec::new();
    let mut errors: Option<syn::Error> = None;

    for field in fields {
        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(e) => {
                match errors.as_mut() {
                    Some(errors) => errors.combine(e),
                    None => errors = Some(e),
                }
                continue;
            }
        };

        if attrs.ignored {
            continue;
        }

        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let field_name = field_ident.unraw().to_string();
        let directive = attrs.directive_value();
        let index = descriptors.len();

        descriptors.push(quote! {
            ::parsenv::FieldDescriptor::new(
                #field_name,
                <#field_type as ::parsenv::Scalar>::KIND,
                #directive,
            )
        });
        assignments.push(quote! {
            #index => {
                if let ::core::option::Option::Some(__v) =
                    <#field_type as ::parsenv::Scalar>::from_value(value)
                {
                    self.#field_ident = __v;
                }
            }
        });
    }

    if let Some(errors) = errors {
        return Err(errors);
    }

    Ok(quote! {
        impl #impl_generics ::parsenv::EnvConfig for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::parsenv::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            #[allow(unused_variables)]
            fn assign(&mut self, index: usize, value: ::parsenv::Value) {
                match index {
                    #(#assignments)*
                    _ => {}
                }
            }
        }
    })
}
