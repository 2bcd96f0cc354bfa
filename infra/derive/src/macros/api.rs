use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{ParseStream, Parser};
use syn::spanned::Spanned;
use syn::{Attribute, Fields, GenericArgument, Ident, ItemStruct, Lit, LitStr, Meta, PathArguments, Type};

/// Expands the `#[api_model]` attribute macro.
///
/// Adds the common derives, then generates the `ApiModel` and `JsonField` implementations
/// from the declared fields. `Serialize` and `Deserialize` are implemented on top of the
/// codec so both paths follow the same rules.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    expand(args, input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand(args: TokenStream, mut input: ItemStruct) -> syn::Result<TokenStream> {
    let ApiModelArgs { rename_all } = parse_api_model_args(args)?;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "api_model does not support generic structs",
        ));
    }
    let Fields::Named(named) = &input.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "api_model requires a struct with named fields",
        ));
    };

    let serde_meta = serde_meta_info(&input.attrs)?;
    if let Some(span) = serde_meta.deny_unknown_fields {
        return Err(syn::Error::new(
            span,
            "api_model records always ignore unknown keys; remove deny_unknown_fields",
        ));
    }
    let policy = resolve_rename_policy(rename_all, &serde_meta)?;

    let derives = derived_trait_names(&input.attrs);
    if let Some(name) = ["Serialize", "Deserialize"].into_iter().find(|name| derives.contains(*name)) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            format!("api_model implements {name} through the codec; remove the serde derive"),
        ));
    }

    let fields = named
        .named
        .iter()
        .map(|field| WireField::parse(field, &policy))
        .collect::<syn::Result<Vec<_>>>()?;

    strip_serde_attrs(&mut input);
    let derive_attr = derive_attr(&derives);
    let codec_impl = codec_impl(&input.ident, &fields);

    Ok(quote! {
        #derive_attr
        #input

        #codec_impl
    })
}

struct ApiModelArgs {
    rename_all: Option<LitStr>,
}

fn parse_api_model_args(args: TokenStream) -> syn::Result<ApiModelArgs> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args)?;

    let mut rename_all = None;

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };
        if name_value.path.is_ident("rename_all") {
            let value = string_literal(&name_value)?;
            set_once(&mut rename_all, &name_value, value)?;
        } else {
            return Err(syn::Error::new_spanned(name_value.path, "Unsupported argument; expected rename_all"));
        }
    }

    Ok(ApiModelArgs { rename_all })
}

fn literal(name_value: &syn::MetaNameValue) -> Option<&Lit> {
    match &name_value.value {
        syn::Expr::Lit(expr_lit) => Some(&expr_lit.lit),
        _ => None,
    }
}

fn string_literal(name_value: &syn::MetaNameValue) -> syn::Result<LitStr> {
    match literal(name_value) {
        Some(Lit::Str(lit)) => Ok(lit.clone()),
        _ => Err(syn::Error::new_spanned(&name_value.value, "rename_all must be a string literal")),
    }
}

fn set_once<T>(slot: &mut Option<T>, token: &syn::MetaNameValue, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

/// Serde container attributes already present on the struct.
#[derive(Default)]
struct SerdeMetaInfo {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<Span>,
}

fn serde_meta_info(attrs: &[Attribute]) -> syn::Result<SerdeMetaInfo> {
    let mut info = SerdeMetaInfo::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                info.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                info.deny_unknown_fields = Some(meta.path.span());
            } else {
                skip_meta_value(meta.input)?;
            }
            Ok(())
        })?;
    }

    Ok(info)
}

/// Consumes `= value` or `(...)` after a serde key we do not interpret.
fn skip_meta_value(input: ParseStream<'_>) -> syn::Result<()> {
    if input.peek(syn::Token![=]) {
        input.parse::<syn::Token![=]>()?;
        input.parse::<syn::Expr>()?;
    } else if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}

/// Wire key policy, mirroring the serde `rename_all` rules for fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenamePolicy {
    Snake,
    Camel,
    Pascal,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

struct ResolvedPolicy {
    policy: RenamePolicy,
    literal: LitStr,
}

impl RenamePolicy {
    fn from_str(value: &str) -> Option<Self> {
        match value {
            "snake_case" | "lowercase" => Some(Self::Snake),
            "camelCase" => Some(Self::Camel),
            "PascalCase" => Some(Self::Pascal),
            "SCREAMING_SNAKE_CASE" | "UPPERCASE" => Some(Self::ScreamingSnake),
            "kebab-case" => Some(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Some(Self::ScreamingKebab),
            _ => None,
        }
    }

    /// Maps a snake_case Rust field name to its wire key.
    fn apply(self, field: &str) -> String {
        match self {
            Self::Snake => field.to_owned(),
            Self::ScreamingSnake => field.to_ascii_uppercase(),
            Self::Kebab => field.replace('_', "-"),
            Self::ScreamingKebab => field.replace('_', "-").to_ascii_uppercase(),
            Self::Pascal => pascal_case(field),
            Self::Camel => {
                let pascal = pascal_case(field);
                let mut chars = pascal.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_ascii_lowercase().to_string() + chars.as_str()
                })
            },
        }
    }
}

fn pascal_case(field: &str) -> String {
    let mut pascal = String::with_capacity(field.len());
    let mut capitalize = true;
    for ch in field.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            pascal.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            pascal.push(ch);
        }
    }
    pascal
}

fn resolve_rename_policy(
    rename_all: Option<LitStr>,
    serde_meta: &SerdeMetaInfo,
) -> syn::Result<ResolvedPolicy> {
    let literal = match (rename_all, &serde_meta.rename_all) {
        (Some(arg), Some(existing)) if arg.value() != existing.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
            ));
        },
        (Some(arg), _) => arg,
        (None, Some(existing)) => existing.clone(),
        (None, None) => LitStr::new("camelCase", Span::call_site()),
    };

    let policy = RenamePolicy::from_str(&literal.value()).ok_or_else(|| {
        syn::Error::new_spanned(&literal, "Unsupported rename_all policy for api_model")
    })?;

    Ok(ResolvedPolicy { policy, literal })
}

/// A declared field together with the key it occupies on the wire.
struct WireField {
    ident: Ident,
    inner_ty: Type,
    key: LitStr,
}

impl WireField {
    fn parse(field: &syn::Field, policy: &ResolvedPolicy) -> syn::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "api_model requires named fields"))?;
        let inner_ty = option_inner(&field.ty).cloned().ok_or_else(|| {
            syn::Error::new_spanned(
                &field.ty,
                "api_model fields must be declared as Option<T>; absence is a valid value",
            )
        })?;

        let key = match field_rename(&field.attrs)? {
            Some(rename) => rename,
            None => {
                let name = ident.to_string();
                let name = name.strip_prefix("r#").unwrap_or(&name);
                LitStr::new(&policy.policy.apply(name), ident.span())
            },
        };

        Ok(Self { ident, inner_ty, key })
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

fn field_rename(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") && meta.input.peek(syn::Token![=]) {
                rename = Some(meta.value()?.parse::<LitStr>()?);
                return Ok(());
            }
            skip_meta_value(meta.input)
        })?;
    }
    Ok(rename)
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let wanted = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("Default", quote! { Default }),
        ("PartialEq", quote! { PartialEq }),
    ];
    let tokens: Vec<_> = wanted
        .into_iter()
        .filter(|(name, _)| !derives.contains(*name))
        .map(|(_, tokens)| tokens)
        .collect();

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

/// `#[serde]` attributes only feed the key policy; nothing derives serde on the struct.
fn strip_serde_attrs(input: &mut ItemStruct) {
    input.attrs.retain(|attr| !attr.path().is_ident("serde"));
    for field in &mut input.fields {
        field.attrs.retain(|attr| !attr.path().is_ident("serde"));
    }
}

fn codec_impl(ident: &Ident, fields: &[WireField]) -> TokenStream {
    let name = LitStr::new(&ident.to_string(), ident.span());
    let idents: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let types: Vec<_> = fields.iter().map(|f| &f.inner_ty).collect();
    let keys: Vec<_> = fields.iter().map(|f| &f.key).collect();

    quote! {
        #[automatically_derived]
        impl ::csc_models::ApiModel for #ident {
            const NAME: &'static str = #name;
            const FIELDS: &'static [&'static str] = &[#(#keys),*];

            fn decode_object(object: &::csc_models::JsonObject) -> Self {
                Self {
                    #( #idents: ::csc_models::codec::decode_field::<#types>(#name, object, #keys), )*
                }
            }

            #[allow(unused_mut)]
            fn encode_object(&self) -> ::csc_models::JsonObject {
                let mut object = ::csc_models::JsonObject::new();
                #(
                    object.insert(
                        ::std::string::String::from(#keys),
                        ::csc_models::codec::encode_field(self.#idents.as_ref()),
                    );
                )*
                object
            }
        }

        #[automatically_derived]
        impl ::csc_models::JsonField for #ident {
            fn decode_field(value: &::csc_models::Value) -> ::std::option::Option<Self> {
                value.as_object().map(<Self as ::csc_models::ApiModel>::decode_object)
            }

            fn encode_field(&self) -> ::csc_models::Value {
                ::csc_models::Value::Object(<Self as ::csc_models::ApiModel>::encode_object(self))
            }
        }

        #[automatically_derived]
        impl ::serde::Serialize for #ident {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::csc_models::codec::serialize_record(self, serializer)
            }
        }

        #[automatically_derived]
        impl<'de> ::serde::Deserialize<'de> for #ident {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                ::csc_models::codec::deserialize_record(deserializer)
            }
        }
    }
}
