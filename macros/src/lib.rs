//! Derive macros for the todolist state container
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums (commands/events)
//!
//! # Example
//!
//! ```ignore
//! use todolist_macros::Action;
//!
//! #[derive(Action, Clone, Debug, Serialize, Deserialize)]
//! #[serde(tag = "type", content = "payload")]
//! enum AppAction {
//!     #[command]
//!     #[serde(rename = "todos/saveNewTodo")]
//!     SaveNewTodo { text: String },
//!
//!     #[event]
//!     #[serde(rename = "todos/todoAdded")]
//!     TodoAdded(Todo),
//! }
//!
//! // Generated methods:
//! assert!(AppAction::SaveNewTodo { text: "milk".into() }.is_command());
//! assert_eq!(action.action_type(), "todos/todoAdded");
//! assert_eq!(action.domain(), "todos");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr, Token, Variant};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_command()` - Returns true if this variant is a command
/// - `is_event()` - Returns true if this variant is an event
/// - `action_type()` - The wire type string of the variant
/// - `domain()` - The part of the type string before the first `/`
///
/// The type string is taken from the variant's `#[serde(rename = "...")]`
/// when present, and is the variant name otherwise.
///
/// # Attributes
///
/// - `#[command]` - Mark a variant as a command (an action that starts work)
/// - `#[event]` - Mark a variant as an event (a fact to record in state)
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[command]` and `#[event]` attributes
/// - A `#[serde(...)]` attribute on a variant cannot be parsed
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut is_command_arms = Vec::new();
    let mut is_event_arms = Vec::new();
    let mut action_type_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_event = has_attribute(&variant.attrs, "event");

        if is_command && is_event {
            return syn::Error::new_spanned(variant, "Variant cannot be both #[command] and #[event]")
                .to_compile_error()
                .into();
        }

        let pattern = variant_pattern(variant);

        if is_command {
            is_command_arms.push(quote! { #pattern => true, });
        }

        if is_event {
            is_event_arms.push(quote! { #pattern => true, });
        }

        let type_name = match serde_rename(&variant.attrs) {
            Ok(Some(rename)) => rename,
            Ok(None) => variant.ident.to_string(),
            Err(error) => return error.to_compile_error().into(),
        };
        action_type_arms.push(quote! { #pattern => #type_name, });
    }

    let expanded = quote! {
        impl #name {
            /// Returns true if this action is a command
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#is_command_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action is an event
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_event(&self) -> bool {
                match self {
                    #(#is_event_arms)*
                    _ => false,
                }
            }

            /// Returns the type string this action is tagged with on the wire
            #[must_use]
            pub const fn action_type(&self) -> &'static str {
                match self {
                    #(#action_type_arms)*
                }
            }

            /// Returns the domain prefix of the type string (`"todos"` for `"todos/todoAdded"`)
            ///
            /// Type strings without a `/` are their own domain.
            #[must_use]
            pub fn domain(&self) -> &'static str {
                let action_type = self.action_type();
                match action_type.split_once('/') {
                    Some((domain, _)) => domain,
                    None => action_type,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// A match pattern covering every value of `variant`
fn variant_pattern(variant: &Variant) -> proc_macro2::TokenStream {
    let ident = &variant.ident;
    match &variant.fields {
        Fields::Named(_) => quote! { Self::#ident { .. } },
        Fields::Unnamed(_) => quote! { Self::#ident(..) },
        Fields::Unit => quote! { Self::#ident },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// The `rename = "..."` value of a `#[serde(...)]` attribute, if any
///
/// Other serde options are skipped. `rename(serialize = "...")` pairs are
/// not interpreted.
fn serde_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") && meta.input.peek(Token![=]) {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
            } else if meta.input.peek(Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                meta.parse_nested_meta(|inner| {
                    if inner.input.peek(Token![=]) {
                        let _: syn::Expr = inner.value()?.parse()?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })?;
    }

    Ok(rename)
}
