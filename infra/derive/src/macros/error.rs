use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type, Variant};

struct VariantMeta<'a> {
    ident: &'a Ident,
    source: Option<&'a Field>,
    has_context: bool,
    cfg_attrs: Vec<&'a Attribute>,
}

/// Expands the `#[csc_error]` attribute macro.
pub fn expand_derive(input: DeriveInput) -> TokenStream {
    expand(&input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "csc_error can only be applied to enums"));
    };
    let variants = data.variants.iter().map(parse_variant).collect::<syn::Result<Vec<_>>>()?;

    let derives = missing_derives(&input.attrs);
    let context_arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg_attrs = &v.cfg_attrs;
        quote! { #(#cfg_attrs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });
    let source_impls = variants.iter().filter_map(|v| source_impl(name, &ext, v));

    Ok(quote! {
        #derives
        #input

        pub trait #ext<T> {
            /// Attaches a human readable context to the error, if any.
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    #[allow(unreachable_patterns)]
                    match &mut err {
                        #(#context_arms)*
                        _ => {},
                    }
                    err
                })
            }
        }

        #(#source_impls)*

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    })
}

fn parse_variant(variant: &Variant) -> syn::Result<VariantMeta<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "csc_error requires named fields for source/context handling",
        ));
    };

    let context = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == "context"));
    if let Some(context) = context
        && !is_context_type(&context.ty)
    {
        return Err(syn::Error::new_spanned(
            &context.ty,
            "context field must be Option<Cow<'static, str>>",
        ));
    }

    let source = fields.named.iter().find(|f| {
        f.ident.as_ref().is_some_and(|i| i == "source")
            || f.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
    });
    if source.is_some() && context.is_none() {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "csc_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        ));
    }

    Ok(VariantMeta {
        ident: &variant.ident,
        source,
        has_context: context.is_some(),
        cfg_attrs: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
    })
}

fn source_impl(name: &Ident, ext: &Ident, v: &VariantMeta<'_>) -> Option<TokenStream> {
    let field = v.source?;
    let source = field.ident.as_ref()?;
    let ty = &field.ty;
    let ident = v.ident;
    let cfg_attrs = &v.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#source: #ty) -> Self { Self::#ident { #source, context: None } }
        }

        #(#cfg_attrs)*
        impl<T> #ext<T> for Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name> {
                self.map_err(|#source| #name::#ident { #source, context: Some(context.into()) })
            }
        }
    })
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let mut present = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                present.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    let mut tokens = Vec::new();
    if !present.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !present.contains("Error") {
        tokens.push(quote! { ::thiserror::Error });
    }
    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn is_context_type(ty: &Type) -> bool {
    let rendered: String = quote!(#ty).to_string().chars().filter(|c| !c.is_whitespace()).collect();
    rendered.ends_with("Option<Cow<'static,str>>")
        || rendered.ends_with("Option<std::borrow::Cow<'static,str>>")
}
