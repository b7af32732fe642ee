//! Derive macros for the todo-sync architecture
//!
//! This crate provides a procedural macro to reduce boilerplate when building
//! action enums for reducer-driven features.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums
//!   (intents/responses)
//!
//! # Example
//!
//! ```ignore
//! use todo_sync_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoListAction {
//!     #[intent]
//!     SubmitNew,
//!
//!     #[response]
//!     Created { title: String },
//! }
//!
//! // Generated methods:
//! assert!(TodoListAction::SubmitNew.is_intent());
//! assert_eq!(TodoListAction::SubmitNew.name(), "SubmitNew");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_intent()` - Returns true if this variant is a user intent
/// - `is_response()` - Returns true if this variant is a gateway response
/// - `name()` - Returns the variant name, for structured logging
///
/// # Attributes
///
/// - `#[intent]` - Mark a variant as a user intent
/// - `#[response]` - Mark a variant as a gateway response
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[intent]` and `#[response]` attributes
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum TodoListAction {
///     #[intent]
///     Toggle { id: TodoId },
///
///     #[response]
///     Toggled { item: TodoItem },
/// }
///
/// let action = TodoListAction::Toggle { id: TodoId::new(1) };
/// assert!(action.is_intent());
/// assert!(!action.is_response());
/// assert_eq!(action.name(), "Toggle");
/// ```
#[proc_macro_derive(Action, attributes(intent, response))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    // Collect variants marked as intents or responses
    let mut intent_variants = Vec::new();
    let mut response_variants = Vec::new();

    for variant in &data_enum.variants {
        let is_intent = has_attribute(&variant.attrs, "intent");
        let is_response = has_attribute(&variant.attrs, "response");

        if is_intent && is_response {
            return syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[intent] and #[response]",
            )
            .to_compile_error()
            .into();
        }

        if is_intent {
            intent_variants.push(variant);
        }

        if is_response {
            response_variants.push(variant);
        }
    }

    let is_intent_arms = intent_variants.iter().map(|v| match_arm(v, quote! { true }));
    let is_response_arms = response_variants
        .iter()
        .map(|v| match_arm(v, quote! { true }));

    // name() covers every variant, classified or not
    let name_arms = data_enum.variants.iter().map(|variant| {
        let variant_name = variant.ident.to_string();
        match_arm(variant, quote! { #variant_name })
    });

    let expanded = quote! {
        impl #name {
            /// Returns true if this action is a user intent
            #[must_use]
            pub const fn is_intent(&self) -> bool {
                match self {
                    #(#is_intent_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action is a gateway response
            #[must_use]
            pub const fn is_response(&self) -> bool {
                match self {
                    #(#is_response_arms)*
                    _ => false,
                }
            }

            /// Returns the variant name, for structured logging
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Build a `Self::Variant ... => value` arm for any field shape
fn match_arm(variant: &syn::Variant, value: proc_macro2::TokenStream) -> proc_macro2::TokenStream {
    let ident = &variant.ident;
    match &variant.fields {
        Fields::Named(_) => quote! { Self::#ident { .. } => #value, },
        Fields::Unnamed(_) => quote! { Self::#ident(..) => #value, },
        Fields::Unit => quote! { Self::#ident => #value, },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
