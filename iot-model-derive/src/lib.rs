use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Fields, GenericArgument, Ident, LitInt, LitStr, Path, PathArguments, Token,
    Type, parse_macro_input,
};

/// Derive macro for IoT model shapes.
///
/// Every field must be an `Option<_>`. For a field `foo` the macro generates:
///
/// - `foo()`: borrowing getter (`Option<&str>`, `Option<&[T]>`, `Option<T>` for
///   copy scalars, `Option<&T>` otherwise)
/// - `set_foo(Option<_>)`: replaces the value; `None` clears it
/// - `with_foo(..)`: fluent setter; on list fields it appends, and
///   `with_foo_list(Option<Vec<_>>)` replaces instead
/// - `add_foo_entry(k, v)` / `clear_foo_entries()`: on map fields
/// - `set_foo_enum(E)` / `with_foo_enum(E)`: on enum-backed string fields
///
/// plus `PartialEq`, `Eq`, `Hash`, `Display`, `ShapeValue`, `Shape`,
/// `Serialize` and `Deserialize`. The struct must also derive `Default`,
/// `Clone` and `Debug`.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Default, Shape)]
/// #[shape(name = "Tag")]
/// pub struct Tag {
///     #[shape(rename = "Key", min_length = 1, max_length = 128)]
///     key: Option<String>,
///
///     #[shape(rename = "Value", max_length = 256)]
///     value: Option<String>,
/// }
/// ```
///
/// Field attributes: `rename`, `min_length`, `max_length`, `min`, `max`,
/// `pattern`, `enumeration = "EnumType"`. Constraints are recorded in the
/// field descriptors only.
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// How a field's inner type is handled by the generated accessors.
enum ValueKind {
    Str,
    /// `bool`, `i32`, `i64`, `f64`, `Timestamp`, returned by value.
    Copy(&'static str),
    Blob,
    Structure,
    List(Type),
    Map(Type),
}

struct FieldSpec<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    inner: &'a Type,
    wire: String,
    kind: ValueKind,
    enumeration: Option<Path>,
    min_length: Option<u64>,
    max_length: Option<u64>,
    min: Option<i64>,
    max: Option<i64>,
    pattern: Option<String>,
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => return derive_for_fields(input, name, Vec::new()),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Shape only supports structs with named fields",
                ));
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "Shape only supports structs")),
    };

    let mut specs = Vec::with_capacity(fields.len());
    for field in fields {
        specs.push(parse_field(field)?);
    }
    derive_for_fields(input, name, specs)
}

fn parse_field(field: &syn::Field) -> Result<FieldSpec<'_>, syn::Error> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;
    let inner = option_inner(&field.ty).ok_or_else(|| {
        syn::Error::new_spanned(&field.ty, "Shape fields must be declared as Option<_>")
    })?;

    let mut spec = FieldSpec {
        ident,
        ty: &field.ty,
        inner,
        wire: lower_camel(&ident.to_string()),
        kind: classify(inner)?,
        enumeration: None,
        min_length: None,
        max_length: None,
        min: None,
        max: None,
        pattern: None,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident("shape") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                spec.wire = value.value();
            } else if meta.path.is_ident("min_length") {
                let value: LitInt = meta.value()?.parse()?;
                spec.min_length = Some(value.base10_parse()?);
            } else if meta.path.is_ident("max_length") {
                let value: LitInt = meta.value()?.parse()?;
                spec.max_length = Some(value.base10_parse()?);
            } else if meta.path.is_ident("min") {
                spec.min = Some(parse_signed(meta.value()?)?);
            } else if meta.path.is_ident("max") {
                spec.max = Some(parse_signed(meta.value()?)?);
            } else if meta.path.is_ident("pattern") {
                let value: LitStr = meta.value()?.parse()?;
                spec.pattern = Some(value.value());
            } else if meta.path.is_ident("enumeration") {
                let value: LitStr = meta.value()?.parse()?;
                spec.enumeration = Some(value.parse()?);
            } else {
                return Err(meta.error("unknown shape field attribute"));
            }
            Ok(())
        })?;
    }

    if spec.enumeration.is_some() && !matches!(spec.kind, ValueKind::Str) {
        return Err(syn::Error::new_spanned(
            spec.ty,
            "enumeration is only valid on Option<String> fields",
        ));
    }

    Ok(spec)
}

fn derive_for_fields(
    input: &DeriveInput,
    name: &Ident,
    specs: Vec<FieldSpec<'_>>,
) -> Result<TokenStream2, syn::Error> {
    let shape_name = shape_name(input)?;

    let methods: Vec<TokenStream2> = specs.iter().map(|s| accessors(s, &shape_name)).collect();
    let descriptors: Vec<TokenStream2> = specs.iter().map(descriptor).collect();

    let idents: Vec<&Ident> = specs.iter().map(|s| s.ident).collect();
    let wires: Vec<&str> = specs.iter().map(|s| s.wire.as_str()).collect();
    let tys: Vec<&Type> = specs.iter().map(|s| s.ty).collect();
    let unused_other = if specs.is_empty() {
        quote! { let _ = other; }
    } else {
        TokenStream2::new()
    };

    Ok(quote! {
        impl #name {
            pub fn new() -> Self {
                ::std::default::Default::default()
            }

            #(#methods)*
        }

        impl ::std::cmp::PartialEq for #name {
            fn eq(&self, other: &Self) -> bool {
                #unused_other
                true #(&& ::iot_model_types::value::eq_option(&self.#idents, &other.#idents))*
            }
        }

        impl ::std::cmp::Eq for #name {}

        impl ::std::hash::Hash for #name {
            fn hash<__H: ::std::hash::Hasher>(&self, state: &mut __H) {
                state.write_i32(::iot_model_types::ShapeValue::hash_code(self));
            }
        }

        impl ::iot_model_types::ShapeValue for #name {
            #[allow(unused_mut)]
            fn hash_code(&self) -> i32 {
                let mut hash: i32 = 1;
                #(
                    hash = ::iot_model_types::value::combine(
                        hash,
                        ::iot_model_types::value::hash_option(&self.#idents),
                    );
                )*
                hash
            }

            fn value_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn render(&self, __f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, __f)
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, __f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::iot_model_types::ShapeFormatter::new(__f)
                    #(.field(#wires, &self.#idents))*
                    .finish()
            }
        }

        impl ::iot_model_types::Shape for #name {
            const NAME: &'static str = #shape_name;

            fn fields() -> &'static [::iot_model_types::FieldDescriptor] {
                static FIELDS: &[::iot_model_types::FieldDescriptor] = &[#(#descriptors),*];
                FIELDS
            }

            #[allow(unused_mut)]
            fn present_fields(&self) -> ::std::vec::Vec<&'static str> {
                let mut present = ::std::vec::Vec::new();
                #(
                    if self.#idents.is_some() {
                        present.push(#wires);
                    }
                )*
                present
            }
        }

        impl ::iot_model_types::__private::serde::Serialize for #name {
            fn serialize<__S>(&self, __serializer: __S) -> ::std::result::Result<__S::Ok, __S::Error>
            where
                __S: ::iot_model_types::__private::serde::Serializer,
            {
                use ::iot_model_types::__private::serde::ser::SerializeMap as _;
                let __len = 0usize #(+ usize::from(self.#idents.is_some()))*;
                let mut __map = __serializer.serialize_map(::std::option::Option::Some(__len))?;
                #(
                    if let ::std::option::Option::Some(__value) = &self.#idents {
                        __map.serialize_entry(#wires, __value)?;
                    }
                )*
                __map.end()
            }
        }

        const _: () = {
            #[derive(::iot_model_types::__private::serde::Deserialize)]
            #[serde(crate = "::iot_model_types::__private::serde")]
            struct __ShapeWire {
                #(
                    #[serde(rename = #wires, default)]
                    #idents: #tys,
                )*
            }

            impl<'de> ::iot_model_types::__private::serde::Deserialize<'de> for #name {
                fn deserialize<__D>(__deserializer: __D) -> ::std::result::Result<Self, __D::Error>
                where
                    __D: ::iot_model_types::__private::serde::Deserializer<'de>,
                {
                    let __wire = <__ShapeWire as ::iot_model_types::__private::serde::Deserialize<'de>>::deserialize(__deserializer)?;
                    ::std::result::Result::Ok(Self {
                        #(#idents: __wire.#idents,)*
                    })
                }
            }
        };
    })
}

fn accessors(spec: &FieldSpec<'_>, shape_name: &str) -> TokenStream2 {
    let ident = spec.ident;
    let ty = spec.ty;
    let inner = spec.inner;
    let wire = spec.wire.as_str();
    let setter = format_ident!("set_{}", ident);
    let with = format_ident!("with_{}", ident);

    let getter = match &spec.kind {
        ValueKind::Str => quote! {
            pub fn #ident(&self) -> ::std::option::Option<&str> {
                self.#ident.as_deref()
            }
        },
        ValueKind::Copy(_) => quote! {
            pub fn #ident(&self) -> #ty {
                self.#ident
            }
        },
        ValueKind::List(elem) => quote! {
            pub fn #ident(&self) -> ::std::option::Option<&[#elem]> {
                self.#ident.as_deref()
            }
        },
        ValueKind::Blob | ValueKind::Structure | ValueKind::Map(_) => quote! {
            pub fn #ident(&self) -> ::std::option::Option<&#inner> {
                self.#ident.as_ref()
            }
        },
    };

    let set = quote! {
        pub fn #setter(&mut self, #ident: #ty) {
            self.#ident = #ident;
        }
    };

    let fluent = match &spec.kind {
        ValueKind::List(elem) => {
            let with_list = format_ident!("with_{}_list", ident);
            quote! {
                /// Appends to the list, creating it when absent.
                pub fn #with<__I>(mut self, #ident: __I) -> Self
                where
                    __I: ::std::iter::IntoIterator,
                    __I::Item: ::std::convert::Into<#elem>,
                {
                    self.#ident
                        .get_or_insert_with(::std::vec::Vec::new)
                        .extend(#ident.into_iter().map(::std::convert::Into::into));
                    self
                }

                /// Replaces the whole list; `None` clears it.
                pub fn #with_list(mut self, #ident: #ty) -> Self {
                    self.#ident = #ident;
                    self
                }
            }
        }
        ValueKind::Map(value_ty) => {
            let add = format_ident!("add_{}_entry", ident);
            let clear = format_ident!("clear_{}_entries", ident);
            quote! {
                pub fn #with(mut self, #ident: #inner) -> Self {
                    self.#ident = ::std::option::Option::Some(#ident);
                    self
                }

                /// Inserts one entry. Fails if `key` is already present.
                pub fn #add(
                    &mut self,
                    key: impl ::std::convert::Into<::std::string::String>,
                    value: impl ::std::convert::Into<#value_ty>,
                ) -> ::iot_model_types::Result<&mut Self> {
                    ::iot_model_types::map::insert_unique(
                        &mut self.#ident,
                        #shape_name,
                        #wire,
                        key.into(),
                        value.into(),
                    )?;
                    ::std::result::Result::Ok(self)
                }

                pub fn #clear(&mut self) -> &mut Self {
                    self.#ident = ::std::option::Option::None;
                    self
                }
            }
        }
        ValueKind::Copy(_) => quote! {
            pub fn #with(mut self, #ident: #inner) -> Self {
                self.#ident = ::std::option::Option::Some(#ident);
                self
            }
        },
        _ => quote! {
            pub fn #with(mut self, #ident: impl ::std::convert::Into<#inner>) -> Self {
                self.#ident = ::std::option::Option::Some(#ident.into());
                self
            }
        },
    };

    let typed_enum = match &spec.enumeration {
        Some(enum_ty) => {
            let set_enum = format_ident!("set_{}_enum", ident);
            let with_enum = format_ident!("with_{}_enum", ident);
            quote! {
                pub fn #set_enum(&mut self, #ident: #enum_ty) {
                    self.#ident = ::std::option::Option::Some(
                        ::iot_model_types::ServiceEnum::as_str(&#ident).to_owned(),
                    );
                }

                pub fn #with_enum(mut self, #ident: #enum_ty) -> Self {
                    self.#set_enum(#ident);
                    self
                }
            }
        }
        None => TokenStream2::new(),
    };

    quote! {
        #getter
        #set
        #fluent
        #typed_enum
    }
}

fn descriptor(spec: &FieldSpec<'_>) -> TokenStream2 {
    let wire = spec.wire.as_str();
    let member = spec.ident.to_string();

    let (kind, target) = match (&spec.kind, &spec.enumeration) {
        (ValueKind::Str, Some(enum_ty)) => ("Enum", Some(path_label(enum_ty))),
        (ValueKind::Str, None) => ("String", None),
        (ValueKind::Copy(kind), _) => (*kind, None),
        (ValueKind::Blob, _) => ("Blob", None),
        (ValueKind::Structure, _) => ("Structure", Some(type_label(spec.inner))),
        (ValueKind::List(elem), _) => ("List", Some(type_label(elem))),
        (ValueKind::Map(value), _) => ("Map", Some(type_label(value))),
    };
    let kind = format_ident!("{}", kind);
    let target = opt_tokens(target.as_deref());
    let allowed_values = match &spec.enumeration {
        Some(enum_ty) => quote! {
            ::std::option::Option::Some(<#enum_ty as ::iot_model_types::ServiceEnum>::VALUES)
        },
        None => quote! { ::std::option::Option::None },
    };
    let min_length = opt_tokens(spec.min_length);
    let max_length = opt_tokens(spec.max_length);
    let min = signed_tokens(spec.min);
    let max = signed_tokens(spec.max);
    let pattern = opt_tokens(spec.pattern.as_deref());

    quote! {
        ::iot_model_types::FieldDescriptor {
            name: #wire,
            member: #member,
            kind: ::iot_model_types::FieldKind::#kind,
            target: #target,
            constraints: ::iot_model_types::Constraints {
                min_length: #min_length,
                max_length: #max_length,
                min: #min,
                max: #max,
                pattern: #pattern,
            },
            allowed_values: #allowed_values,
        }
    }
}

fn opt_tokens<T: quote::ToTokens>(value: Option<T>) -> TokenStream2 {
    match value {
        Some(v) => quote! { ::std::option::Option::Some(#v) },
        None => quote! { ::std::option::Option::None },
    }
}

fn signed_tokens(value: Option<i64>) -> TokenStream2 {
    match value {
        Some(v) if v < 0 => {
            let abs = v.unsigned_abs();
            quote! { ::std::option::Option::Some(-(#abs as i64)) }
        }
        Some(v) => quote! { ::std::option::Option::Some(#v) },
        None => quote! { ::std::option::Option::None },
    }
}

/// Reads `#[shape(name = "...")]` from the struct, defaulting to its ident.
fn shape_name(input: &DeriveInput) -> Result<String, syn::Error> {
    let mut name = input.ident.to_string();
    for attr in &input.attrs {
        if !attr.path().is_ident("shape") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = value.value();
                Ok(())
            } else {
                Err(meta.error("unknown shape attribute (expected `name`)"))
            }
        })?;
    }
    Ok(name)
}

fn parse_signed(input: syn::parse::ParseStream<'_>) -> syn::Result<i64> {
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }
    let value: LitInt = input.parse()?;
    let value: i64 = value.base10_parse()?;
    Ok(if negative { -value } else { value })
}

/// Extracts `T` from `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let segment = last_segment(ty)?;
    if segment.ident != "Option" {
        return None;
    }
    generic_args(segment).into_iter().next()
}

fn classify(inner: &Type) -> Result<ValueKind, syn::Error> {
    let segment = last_segment(inner)
        .ok_or_else(|| syn::Error::new_spanned(inner, "unsupported Shape field type"))?;
    let kind = match segment.ident.to_string().as_str() {
        "String" => ValueKind::Str,
        "bool" => ValueKind::Copy("Boolean"),
        "i32" => ValueKind::Copy("Integer"),
        "i64" => ValueKind::Copy("Long"),
        "f64" => ValueKind::Copy("Double"),
        "Timestamp" => ValueKind::Copy("Timestamp"),
        "Blob" => ValueKind::Blob,
        "Vec" => {
            let elem = generic_args(segment).into_iter().next().ok_or_else(|| {
                syn::Error::new_spanned(inner, "Vec field needs an element type")
            })?;
            ValueKind::List(elem.clone())
        }
        "BTreeMap" => {
            let args = generic_args(segment);
            match args.as_slice() {
                [key, value] if last_segment(key).is_some_and(|s| s.ident == "String") => {
                    ValueKind::Map((*value).clone())
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        inner,
                        "map fields must be BTreeMap<String, V>",
                    ));
                }
            }
        }
        "HashMap" => {
            return Err(syn::Error::new_spanned(
                inner,
                "use BTreeMap<String, V> for map fields",
            ));
        }
        _ => ValueKind::Structure,
    };
    Ok(kind)
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(type_path) => type_path.path.segments.last(),
        _ => None,
    }
}

fn generic_args(segment: &syn::PathSegment) -> Vec<&Type> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Renders a type as `Vec<String>`-style text for descriptors.
fn type_label(ty: &Type) -> String {
    let Some(segment) = last_segment(ty) else {
        return quote!(#ty).to_string();
    };
    let args = generic_args(segment);
    if args.is_empty() {
        segment.ident.to_string()
    } else {
        let inner: Vec<String> = args.into_iter().map(type_label).collect();
        format!("{}<{}>", segment.ident, inner.join(", "))
    }
}

fn path_label(path: &Path) -> String {
    path.segments
        .last()
        .map(|s| s.ident.to_string())
        .unwrap_or_default()
}

/// `thing_group_names` -> `thingGroupNames`.
fn lower_camel(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.trim_start_matches("r#").chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
