use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

pub fn derive_survey_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let field_enum = format_ident!("{}Field", name);
    let draft_name = format_ident!("{}Draft", name);

    let collection = extract_collection(&input);

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("SurveyRecord derive only supports structs with named fields"),
        },
        _ => panic!("SurveyRecord derive only supports structs"),
    };

    let mut id_field: Option<Ident> = None;
    let mut identity_field: Option<Ident> = None;
    let mut line_fields: Vec<(Ident, Type)> = Vec::new();

    for field in fields {
        let ident = field.ident.clone().unwrap();
        let role = field_role(&field.attrs);

        let unmarked = role == FieldRole::Line;
        if role == FieldRole::Id || (unmarked && ident == "id" && id_field.is_none()) {
            id_field = Some(ident);
        } else if role == FieldRole::Identity
            || (role == FieldRole::Line && ident == "identity" && identity_field.is_none())
        {
            identity_field = Some(ident);
        } else {
            line_fields.push((ident, field.ty.clone()));
        }
    }

    let id_field = id_field
        .expect("SurveyRecord derive: no field marked with #[survey(id)] and no field named `id`");
    let identity_field = identity_field.expect(
        "SurveyRecord derive: no #[survey(identity)] field and no field named `identity`",
    );

    let variants: Vec<Ident> = line_fields
        .iter()
        .map(|(ident, _)| format_ident!("{}", to_camel_case(&ident.to_string())))
        .collect();
    let field_names: Vec<LitStr> = line_fields
        .iter()
        .map(|(ident, _)| LitStr::new(&ident.to_string(), ident.span()))
        .collect();
    let idents: Vec<&Ident> = line_fields.iter().map(|(ident, _)| ident).collect();
    let types: Vec<&Type> = line_fields.iter().map(|(_, ty)| ty).collect();

    let enum_doc = format!("Single line-item field assignment for [`{}`].", name);
    let draft_doc = format!(
        "Line-item payload for adding a [`{}`]; id and identity are assigned by the store.",
        name
    );

    let expanded = quote! {
        #[doc = #enum_doc]
        #[derive(Clone, Debug, PartialEq)]
        pub enum #field_enum {
            #(#variants(#types)),*
        }

        impl #field_enum {
            /// Name of the record field this assignment targets.
            pub fn name(&self) -> &'static str {
                match self {
                    #(#field_enum::#variants(_) => #field_names),*
                }
            }
        }

        #[doc = #draft_doc]
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct #draft_name {
            #(pub #idents: #types),*
        }

        impl survey_store::SurveyRecord for #name {
            type Field = #field_enum;
            type Draft = #draft_name;

            const COLLECTION: &'static str = #collection;

            fn id(&self) -> u32 {
                self.#id_field
            }

            fn identity(&self) -> &survey_store::SurveyIdentity {
                &self.#identity_field
            }

            fn identity_mut(&mut self) -> &mut survey_store::SurveyIdentity {
                &mut self.#identity_field
            }

            fn from_draft(
                id: u32,
                identity: survey_store::SurveyIdentity,
                draft: #draft_name,
            ) -> Self {
                #name {
                    #id_field: id,
                    #identity_field: identity,
                    #(#idents: draft.#idents),*
                }
            }

            fn apply(&mut self, field: #field_enum) {
                match field {
                    #(#field_enum::#variants(value) => self.#idents = value),*
                }
            }

            fn field_name(field: &#field_enum) -> &'static str {
                field.name()
            }
        }
    };

    TokenStream::from(expanded)
}

#[derive(PartialEq)]
enum FieldRole {
    Id,
    Identity,
    Line,
}

fn field_role(attrs: &[syn::Attribute]) -> FieldRole {
    for attr in attrs {
        if !attr.path().is_ident("survey") {
            continue;
        }

        let mut role = FieldRole::Line;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                role = FieldRole::Id;
            } else if meta.path.is_ident("identity") {
                role = FieldRole::Identity;
            }
            Ok(())
        });

        if role != FieldRole::Line {
            return role;
        }
    }
    FieldRole::Line
}

fn extract_collection(input: &DeriveInput) -> String {
    for attr in &input.attrs {
        if !attr.path().is_ident("survey") {
            continue;
        }

        let mut collection = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                collection = Some(value.value());
            }
            Ok(())
        });

        if let Some(c) = collection {
            return c;
        }
    }

    // Default: snake_case struct name without a trailing "Record", plus "s"
    let name = input.ident.to_string();
    let base = name.strip_suffix("Record").unwrap_or(&name);
    format!("{}s", to_snake_case(base))
}

fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut upper = true;
    for ch in s.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            result.extend(ch.to_uppercase());
            upper = false;
        } else {
            result.push(ch);
        }
    }
    result
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
