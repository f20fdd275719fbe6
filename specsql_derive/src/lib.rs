extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Fields, ItemStruct, LitInt, LitStr, Type, parse_macro_input};

/// Derives a `specsql::Spec` from a struct with named fields.
///
/// ```ignore
/// #[table_spec(table_name = "users")]
/// struct User {
///     id: i64,
///     #[column(width = 100)]
///     name: String,
///     active: bool,
/// }
///
/// let sql = specsql::create_table_sql(User::table_name(), &User::spec());
/// ```
///
/// `String` and `&str` fields become text columns (width 255 unless set
/// with `#[column(width = N)]`), `bool` becomes bool and integer primitives
/// become int. `#[column(name = "...")]` overrides the column name.
#[proc_macro_attribute]
pub fn table_spec(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(item as ItemStruct);

    // -------- table_name parsing --------
    let mut table_name = input.ident.to_string().to_lowercase();
    if !attr.is_empty() {
        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("table_name") {
                let lit: LitStr = meta.value()?.parse()?;
                table_name = lit.value();
                Ok(())
            } else {
                Err(meta.error("expected `table_name = \"...\"`"))
            }
        });
        parse_macro_input!(attr with parser);
    }

    // -------- fields --------
    let fields = match &mut input.fields {
        Fields::Named(named) => &mut named.named,
        other => {
            return syn::Error::new_spanned(other, "table_spec requires named fields")
                .to_compile_error()
                .into();
        }
    };

    let mut cols = Vec::new();
    for f in fields.iter_mut() {
        match column_tokens(f) {
            Ok(col) => cols.push(col),
            Err(e) => return e.to_compile_error().into(),
        }
        f.attrs.retain(|attr| !attr.path().is_ident("column"));
    }

    // -------- generate output --------
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let expanded = quote! {
        #input

        impl #impl_generics #struct_name #ty_generics #where_clause {
            pub fn table_name() -> &'static str {
                #table_name
            }

            pub fn spec() -> ::specsql::Spec {
                ::specsql::Spec::new(vec![#(#cols),*])
            }

            pub fn table_def() -> ::specsql::TableDef {
                ::specsql::TableDef::new(Self::table_name(), Self::spec())
            }
        }
    };

    TokenStream::from(expanded)
}

fn column_tokens(f: &syn::Field) -> syn::Result<TokenStream2> {
    let mut col_name = match &f.ident {
        Some(ident) => ident.to_string().trim_start_matches("r#").to_string(),
        None => return Err(syn::Error::new_spanned(f, "field has no name")),
    };
    let mut width: Option<i64> = None;

    for attr in f.attrs.iter().filter(|a| a.path().is_ident("column")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("width") {
                let lit: LitInt = meta.value()?.parse()?;
                width = Some(lit.base10_parse()?);
                Ok(())
            } else if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                col_name = lit.value();
                Ok(())
            } else {
                Err(meta.error("expected `width = N` or `name = \"...\"`"))
            }
        })?;
    }

    let datatype = match classify(&f.ty) {
        Some(kind) => kind,
        None => {
            return Err(syn::Error::new_spanned(
                &f.ty,
                format!("unsupported type for column `{}`", col_name),
            ));
        }
    };

    let tokens = match datatype {
        Kind::Text => {
            let width = width.unwrap_or(255);
            quote! { ::specsql::Column::new(#col_name, ::specsql::Datatype::Text, #width) }
        }
        Kind::Bool => quote! { ::specsql::Column::new(#col_name, ::specsql::Datatype::Bool, 0) },
        Kind::Int => quote! { ::specsql::Column::new(#col_name, ::specsql::Datatype::Int, 0) },
    };
    Ok(tokens)
}

enum Kind {
    Text,
    Bool,
    Int,
}

fn classify(ty: &Type) -> Option<Kind> {
    match ty {
        Type::Reference(r) => classify(&r.elem),
        Type::Path(p) if p.qself.is_none() => {
            let ident = p.path.segments.last()?.ident.to_string();
            match ident.as_str() {
                "String" | "str" => Some(Kind::Text),
                "bool" => Some(Kind::Bool),
                "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32"
                | "u64" | "u128" | "usize" => Some(Kind::Int),
                _ => None,
            }
        }
        _ => None,
    }
}
