use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// One `tag = expr` pair inside the `error` attribute.
enum Tag {
    Message(Expr),
    Labels(Expr),
    Help(Expr),
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        match ident.to_string().as_str() {
            "message" => Ok(Self::Message(input.parse()?)),
            "labels" => Ok(Self::Labels(input.parse()?)),
            "help" => Ok(Self::Help(input.parse()?)),
            other => Err(syn::Error::new_spanned(&ident, format!("unknown tag `{}`", other))),
        }
    }
}

/// The arguments passed to the `error` attribute.
#[derive(Default)]
struct ErrorArgs {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let tags = Punctuated::<Tag, Token![,]>::parse_terminated(input)?;
        Ok(tags.into_iter().fold(ErrorArgs::default(), |mut args, tag| {
            match tag {
                Tag::Message(expr) => args.message = Some(expr),
                Tag::Labels(expr) => args.labels = Some(expr),
                Tag::Help(expr) => args.help = Some(expr),
            }
            args
        }))
    }
}

/// Creates a `let` statement that destructures `self` into its named fields, so that tag
/// expressions can refer to them.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| field.ident.as_ref());
            quote! {
                #[allow(unused_variables)]
                let #ident { #(#names),* } = self;
            }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// The struct to derive `ErrorKind` for.
pub struct ErrorKindTarget {
    pub name: Ident,
    fields: Fields,
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let args = match item.attrs.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ErrorArgs>()?,
            None => ErrorArgs::default(),
        };
        let Some(message) = args.message else {
            return Err(syn::Error::new_spanned(&item.ident, "missing `message` in `#[error(...)]`"));
        };

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            message,
            labels: args.labels,
            help: args.help,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure = destructure_fields(&self.name, &self.fields);
        let message = &self.message;
        let labels = self.labels.as_ref()
            .map(|e| quote! { #e })
            .unwrap_or_else(|| quote! { [""; 0] });
        let help = self.help.as_ref().map(|e| quote! { builder.set_help(#e); });

        tokens.extend(quote! {
            fn message(&self) -> String {
                #destructure
                (#message).to_string()
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #destructure

                // spans past the last label are highlighted without text
                let label_texts = #labels
                    .into_iter()
                    .map(|text| text.to_string())
                    .chain(std::iter::repeat(String::new()));
                let labels = spans
                    .iter()
                    .zip(label_texts)
                    .map(|(span, text)| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(sym_error::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<Vec<_>>();

                let offset = spans.first().map_or(0, |span| span.start);
                #[allow(unused_mut)]
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(self.message())
                    .with_labels(labels);

                #help
                builder.finish()
            }
        });
    }
}
