use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate the plumbing shared by every channel based color model: the
/// struct itself with alpha, flags and the source literal, getters for each
/// channel, the tuple view and the `ColorValue` implementation.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_docs = input
        .fields
        .iter()
        .map(|f| {
            f.attrs
                .iter()
                .filter(|a| a.path().is_ident("doc"))
                .cloned()
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];
    let doc1 = &field_docs[0];
    let doc2 = &field_docs[1];
    let doc3 = &field_docs[2];

    // Channels are only reachable through getters, models are immutable.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Inherited;
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Debug)]
        })
        .unwrap();
    input.attrs.extend(attr);

    if let syn::Fields::Named(ref mut named) = input.fields {
        let extra: [proc_macro2::TokenStream; 3] = [
            quote! { alpha: crate::Component },
            quote! { flags: crate::models::Flags },
            quote! { literal: Option<String> },
        ];
        for field in extra {
            named
                .named
                .push(syn::Field::parse_named.parse2(field).unwrap());
        }
    }

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Build the model from channels that were already validated.
            pub(crate) fn from_parts(
                #field1: crate::Component,
                #field2: crate::Component,
                #field3: crate::Component,
                alpha: crate::Component,
                flags: crate::models::Flags,
                literal: Option<String>,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha,
                    flags,
                    literal,
                }
            }

            #(#doc1)*
            pub fn #field1(&self) -> crate::Component {
                self.#field1
            }

            #(#doc2)*
            pub fn #field2(&self) -> crate::Component {
                self.#field2
            }

            #(#doc3)*
            pub fn #field3(&self) -> crate::Component {
                self.#field3
            }

            /// The alpha channel, `1.0` when it was not specified.
            pub fn alpha(&self) -> crate::Component {
                self.alpha
            }

            /// Flags recorded while the model was constructed.
            pub fn flags(&self) -> crate::models::Flags {
                self.flags
            }

            /// Returns true if the alpha channel was given explicitly.
            pub fn has_explicit_alpha(&self) -> bool {
                self.flags.contains(crate::models::Flags::ALPHA_IS_EXPLICIT)
            }

            /// The string this model was parsed from, if any.
            pub fn literal(&self) -> Option<&str> {
                self.literal.as_deref()
            }

            /// The three color channels, without alpha.
            pub fn components(&self) -> [crate::Component; 3] {
                [self.#field1, self.#field2, self.#field3]
            }

            /// The three color channels followed by alpha.
            pub fn value_of(&self) -> [crate::Component; 4] {
                [self.#field1, self.#field2, self.#field3, self.alpha]
            }
        }

        impl PartialEq for #struct_name {
            fn eq(&self, other: &Self) -> bool {
                self.value_of() == other.value_of()
            }
        }

        impl From<&#struct_name> for [crate::Component; 4] {
            fn from(value: &#struct_name) -> Self {
                value.value_of()
            }
        }

        impl crate::models::ColorValue for #struct_name {
            fn alpha(&self) -> crate::Component {
                self.alpha
            }

            fn has_explicit_alpha(&self) -> bool {
                #struct_name::has_explicit_alpha(self)
            }

            fn value_of(&self) -> [crate::Component; 4] {
                #struct_name::value_of(self)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
