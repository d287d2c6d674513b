use proc_macro::TokenStream;
use quote::quote;

fn get_enum_variants(
    input: &syn::DeriveInput,
) -> &syn::punctuated::Punctuated<syn::Variant, syn::token::Comma> {
    let variants = match &input.data {
        syn::Data::Enum(enum_item) => &enum_item.variants,
        _ => panic!("Input must be an enum."),
    };

    assert!(
        variants.iter().all(|v| v.fields.is_empty()),
        "All variants must have no fields."
    );

    variants
}

/// Derives `FromStr` (case-insensitive match on the variant name) and
/// `Display` (the lowercased variant name) for a fieldless enum.
///
/// This is what lets assembler source refer to mnemonics and registers by
/// name in any case, and what renders them back in canonical lowercase.
#[proc_macro_derive(EnumText)]
pub fn enum_text_derive(input: TokenStream) -> TokenStream {
    let syn_item: syn::DeriveInput = syn::parse(input).unwrap();
    let name = &syn_item.ident;
    let name_str = name.to_string();
    let variants = get_enum_variants(&syn_item);

    let identifiers: Vec<&syn::Ident> = variants.iter().map(|v| &v.ident).collect();
    let names: Vec<String> = variants.iter().map(|v| v.ident.to_string()).collect();
    let lower_names: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();

    let expanded = quote! {
        impl ::std::str::FromStr for #name {
            type Err = ::util::ParseEnumError;

            fn from_str(s: &str) -> ::std::result::Result<#name, ::util::ParseEnumError> {
                #(
                    if s.eq_ignore_ascii_case(#names) {
                        return Ok(#name::#identifiers);
                    }
                )*
                Err(::util::ParseEnumError {
                    value: s.to_string(),
                    enum_name: #name_str,
                })
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(match self {
                    #( #name::#identifiers => #lower_names, )*
                })
            }
        }
    };

    expanded.into()
}
