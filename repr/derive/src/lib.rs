use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Error, Expr, Fields, Ident,
    LitStr, Path, Token,
};

/// `#[derive(Debuggable)]`
///
/// - named structs become `Constructor`s, tuple structs `VConstructor`s and unit
///   structs `Object`s, named after the type and living in the module path;
/// - enum variants take the same three shapes, namespaced under the enum;
/// - `#[debuggable(namespace = "a::b")]` on the type replaces the module path;
/// - `#[debuggable(skip)]` on a field leaves it out;
/// - `#[debuggable(with = "path")]` on a field converts it with `path(&field) -> Repr`.
#[proc_macro_derive(Debuggable, attributes(debuggable))]
pub fn debuggable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        | Ok(tokens) => TokenStream::from(tokens),
        | Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

/* ------------------------------- Attributes ------------------------------- */

enum FieldConv {
    Natural,
    Skip,
    With(Path),
}

fn is_debuggable(attr: &Attribute) -> bool {
    attr.path().is_ident("debuggable")
}

fn container_namespace(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut namespace = None;
    for attr in attrs.iter().filter(|attr| is_debuggable(attr)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("namespace") {
                namespace = Some(meta.value()?.parse::<LitStr>()?);
                Ok(())
            } else {
                Err(meta.error("expected `namespace = \"...\"`"))
            }
        })?;
    }
    Ok(namespace)
}

fn field_conv(attrs: &[Attribute]) -> syn::Result<FieldConv> {
    let mut conv = FieldConv::Natural;
    for attr in attrs.iter().filter(|attr| is_debuggable(attr)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                conv = FieldConv::Skip;
                Ok(())
            } else if meta.path.is_ident("with") {
                let path = meta.value()?.parse::<LitStr>()?;
                conv = FieldConv::With(path.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `with = \"path\"`"))
            }
        })?;
    }
    Ok(conv)
}

fn no_variant_attrs(attrs: &[Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|attr| is_debuggable(attr)) {
        | Some(attr) => {
            Err(Error::new_spanned(attr, "`debuggable` attributes go on types and fields"))
        }
        | None => Ok(()),
    }
}

/* --------------------------------- Shapes --------------------------------- */

/// The destructuring pattern of one struct or variant, and the `Repr` built from it.
struct Shape {
    pattern: TokenStream2,
    body: TokenStream2,
}

fn convert(conv: &FieldConv, binding: &syn::Ident) -> TokenStream2 {
    match conv {
        | FieldConv::With(path) => quote!( #path(#binding) ),
        | FieldConv::Natural | FieldConv::Skip => {
            quote!( ::debuggable::Debuggable::to_repr(#binding) )
        }
    }
}

fn shape(
    path: TokenStream2, name: &str, fields: &Fields, namespace: &TokenStream2,
) -> syn::Result<Shape> {
    match fields {
        | Fields::Named(named) => {
            let mut binders = Vec::new();
            let mut pushes = Vec::new();
            for field in &named.named {
                let conv = field_conv(&field.attrs)?;
                if let FieldConv::Skip = conv {
                    continue;
                }
                let Some(ident) = field.ident.as_ref() else {
                    return Err(Error::new_spanned(field, "expected a named field"));
                };
                let label = ident.unraw().to_string();
                let binding = format_ident!("__field_{}", ident.unraw());
                let repr = convert(&conv, &binding);
                binders.push(quote!( #ident: #binding ));
                pushes.push(quote!( __debuggable_fields.push((#label, #repr)); ));
            }
            Ok(Shape {
                pattern: quote!( #path { #( #binders, )* .. } ),
                body: quote!({
                    #[allow(unused_mut)]
                    let mut __debuggable_fields: ::std::vec::Vec<(
                        &'static str,
                        ::debuggable::Repr,
                    )> = ::std::vec::Vec::new();
                    #( #pushes )*
                    ::debuggable::Repr::constructor(#namespace, #name, __debuggable_fields)
                }),
            })
        }
        | Fields::Unnamed(unnamed) => {
            let mut binders = Vec::new();
            let mut values = Vec::new();
            for (idx, field) in unnamed.unnamed.iter().enumerate() {
                let conv = field_conv(&field.attrs)?;
                if let FieldConv::Skip = conv {
                    binders.push(quote!(_));
                    continue;
                }
                let binding = format_ident!("__field{}", idx);
                values.push(convert(&conv, &binding));
                binders.push(quote!(#binding));
            }
            Ok(Shape {
                pattern: quote!( #path ( #( #binders ),* ) ),
                body: quote!(
                    ::debuggable::Repr::vconstructor(#namespace, #name, [ #( #values ),* ])
                ),
            })
        }
        | Fields::Unit => Ok(Shape {
            pattern: quote!( #path ),
            body: quote!( ::debuggable::Repr::object(#namespace, #name) ),
        }),
    }
}

/* --------------------------------- Expand --------------------------------- */

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = input.ident.clone();
    let name = ident.unraw().to_string();
    let module = match container_namespace(&input.attrs)? {
        | Some(lit) => quote!( ::debuggable::Namespace::from_module_path(#lit) ),
        | None => quote!( ::debuggable::Namespace::from_module_path(::core::module_path!()) ),
    };

    let params: Vec<_> = input.generics.type_params().map(|param| param.ident.clone()).collect();
    let where_clause = input.generics.make_where_clause();
    for param in params {
        where_clause.predicates.push(parse_quote!( #param: ::debuggable::Debuggable ));
    }
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match &input.data {
        | Data::Struct(data) => {
            let Shape { pattern, body } =
                shape(quote!(Self), &name, &data.fields, &quote!(__debuggable_namespace))?;
            quote!({
                let __debuggable_namespace = #module;
                let #pattern = self;
                #body
            })
        }
        | Data::Enum(data) => {
            let mut arms = Vec::new();
            for variant in &data.variants {
                no_variant_attrs(&variant.attrs)?;
                let variant_ident = &variant.ident;
                let variant_name = variant_ident.unraw().to_string();
                let Shape { pattern, body } = shape(
                    quote!(Self::#variant_ident),
                    &variant_name,
                    &variant.fields,
                    &quote!(__debuggable_namespace),
                )?;
                arms.push(quote!( #pattern => #body ));
            }
            if arms.is_empty() {
                quote!( match *self {} )
            } else {
                quote!({
                    let __debuggable_namespace = #module.child(#name);
                    match self {
                        #( #arms ),*
                    }
                })
            }
        }
        | Data::Union(data) => {
            return Err(Error::new_spanned(
                data.union_token,
                "`Debuggable` cannot be derived for unions",
            ));
        }
    };

    Ok(quote!(
        impl #impl_generics ::debuggable::Debuggable for #ident #ty_generics #where_clause {
            fn to_repr(&self) -> ::debuggable::Repr {
                #body
            }
        }
    ))
}

/* ------------------------------- Templating ------------------------------- */

/// `format!` whose arguments are rendered through `Debuggable`.
///
/// Positional arguments, `name = value` arguments and identifiers captured
/// inline (`"{name}"`) are all converted; a leading `renderer;` picks the
/// policy, minimal otherwise. Width and precision parameters (`{:>w$}`) are
/// left to `format!`.
///
/// ```ignore
/// let source = "cache";
/// assert_eq!(dformat!("got {} from {source}", Some(3)), r#"got Some(3) from "cache""#);
/// assert_eq!(dformat!(Renderer::Full; "{}", None::<u8>), "std::option::None");
/// ```
#[proc_macro]
pub fn dformat(input: TokenStream) -> TokenStream {
    let template = parse_macro_input!(input as Template);
    TokenStream::from(template.expand())
}

struct Template {
    renderer: Option<Expr>,
    fmt: LitStr,
    positional: Vec<Expr>,
    named: Vec<(Ident, Expr)>,
}

impl Parse for Template {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let renderer = if input.peek(LitStr) {
            None
        } else {
            let renderer = input.parse()?;
            input.parse::<Token![;]>()?;
            Some(renderer)
        };
        let fmt = input.parse()?;
        let mut positional = Vec::new();
        let mut named = Vec::new();
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            if input.peek(Ident) && input.peek2(Token![=]) && !input.peek2(Token![==]) {
                let name = input.parse()?;
                input.parse::<Token![=]>()?;
                named.push((name, input.parse()?));
            } else if named.is_empty() {
                positional.push(input.parse()?);
            } else {
                return Err(input.error("positional arguments cannot follow named arguments"));
            }
        }
        Ok(Template { renderer, fmt, positional, named })
    }
}

/// Names referenced inline by a format string, in order of first use.
fn captures(fmt: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut chars = fmt.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '{' {
            continue;
        }
        if chars.peek() == Some(&'{') {
            chars.next();
            continue;
        }
        let mut arg = String::new();
        while let Some(&c) = chars.peek() {
            if c == '}' || c == ':' {
                break;
            }
            arg.push(c);
            chars.next();
        }
        let arg = arg.trim();
        let is_ident = arg.starts_with(|c: char| c.is_alphabetic() || c == '_')
            && arg.chars().all(|c| c.is_alphanumeric() || c == '_')
            && arg != "_";
        if is_ident && !names.iter().any(|name| name == arg) {
            names.push(arg.to_string());
        }
    }
    names
}

impl Template {
    fn expand(self) -> TokenStream2 {
        let Template { renderer, fmt, positional, named } = self;
        let renderer = match renderer {
            | Some(renderer) => quote!(#renderer),
            | None => quote!(::debuggable::Renderer::Minimal),
        };
        let captured: Vec<Ident> = captures(&fmt.value())
            .into_iter()
            .filter(|name| !named.iter().any(|(ident, _)| ident == name))
            .map(|name| Ident::new(&name, fmt.span()))
            .collect();
        let names = named.iter().map(|(name, _)| name);
        let values = named.iter().map(|(_, value)| value);
        quote!({
            #[allow(unused_variables)]
            let __debuggable_renderer: ::debuggable::Renderer = #renderer;
            ::std::format!(
                #fmt,
                #( ::debuggable::Shown::new(&#positional, __debuggable_renderer), )*
                #( #names = ::debuggable::Shown::new(&#values, __debuggable_renderer), )*
                #( #captured = ::debuggable::Shown::new(&#captured, __debuggable_renderer), )*
            )
        })
    }
}
