//! Textual rewrite of logical identifiers to physical ones.
//!
//! [`Serializer::render`] produces physical SQL directly and is what queries
//! run with. The rewriter works on SQL text that was rendered with logical
//! names, for callers holding such text. It tokenizes the statement, so
//! string literals and unrelated words are never touched, and it refuses to
//! rewrite when a rename could be applied ambiguously.

mod tokenize;
use tokenize::{tokenize, Token};

use crate::serializer::{push_quoted, Params, Serializer};

use ontoquery_core::{
    plan::Plan,
    schema::{DataSourceMapping, IdentCase, ObjectType, ID_FIELD},
    Error, Result,
};

/// Words the logical renderer emits unquoted.
const KEYWORDS: &[&str] = &[
    "AND", "AS", "ASC", "BY", "DESC", "FALSE", "FROM", "IS", "LIMIT", "NOT", "NULL", "OFFSET",
    "OR", "ORDER", "SELECT", "TRUE", "WHERE",
];

/// Rewrites the identifiers of one object type in rendered SQL.
#[derive(Debug, Clone)]
pub struct IdentifierRewriter {
    /// The table rename first, then the id field, then each mapped property
    renames: Vec<Rename>,

    /// Identifier quote character of the dialect
    quote: char,

    /// Whether `\` escapes characters in string literals
    backslash_escapes: bool,
}

#[derive(Debug, Clone)]
struct Rename {
    logical: String,
    physical: String,
}

impl IdentifierRewriter {
    fn new(
        object_type: &ObjectType,
        mapping: &DataSourceMapping,
        ident_case: IdentCase,
        quote: char,
        backslash_escapes: bool,
    ) -> Result<IdentifierRewriter> {
        let mut renames = vec![
            Rename {
                logical: object_type.name.clone(),
                physical: ident_case.apply(&mapping.table),
            },
            Rename {
                logical: ID_FIELD.to_string(),
                physical: ident_case.apply(&mapping.id_column),
            },
        ];

        for property in &object_type.properties {
            if let Some(column) = mapping.column_name(&property.name) {
                renames.push(Rename {
                    logical: property.name.clone(),
                    physical: ident_case.apply(column),
                });
            }
        }

        for (i, a) in renames.iter().enumerate() {
            for b in &renames[i + 1..] {
                if a.logical.eq_ignore_ascii_case(&b.logical) && a.physical != b.physical {
                    return Err(Error::rewrite_ambiguity(format!(
                        "`{}` and `{}` of `{}` are indistinguishable but map to `{}` and `{}`",
                        a.logical, b.logical, object_type.name, a.physical, b.physical
                    )));
                }
            }
        }

        // A target that reads as another logical identifier would be
        // rewritten again on a second pass.
        for a in &renames {
            for b in &renames {
                if a.physical.eq_ignore_ascii_case(&b.logical) && a.physical != b.physical {
                    return Err(Error::rewrite_ambiguity(format!(
                        "`{}` maps to `{}`, which is also the logical identifier `{}` of `{}`",
                        a.logical, a.physical, b.logical, object_type.name
                    )));
                }
            }
        }

        Ok(IdentifierRewriter {
            renames,
            quote,
            backslash_escapes,
        })
    }

    /// Rewrites every logical identifier in `sql` to its quoted physical
    /// name.
    ///
    /// Quoted identifiers match exactly and bare words ignoring case. String
    /// literals pass through untouched. Rewriting already rewritten text
    /// returns it unchanged.
    pub fn rewrite(&self, sql: &str) -> Result<String> {
        let table = &self.renames[0];
        let mut out = String::with_capacity(sql.len());
        let mut saw_table = false;

        for token in tokenize(sql, self.quote, self.backslash_escapes)? {
            match token {
                Token::Text(text) | Token::Literal(text) => out.push_str(text),
                Token::Quoted { ident, raw } => {
                    if ident == table.logical || ident == table.physical {
                        saw_table = true;
                    }

                    match self.renames.iter().find(|rename| rename.logical == ident) {
                        Some(rename) => push_quoted(&mut out, &rename.physical, self.quote),
                        None => out.push_str(raw),
                    }
                }
                Token::Word(word) => {
                    let rename = self
                        .renames
                        .iter()
                        .find(|rename| rename.logical.eq_ignore_ascii_case(word));

                    match rename {
                        Some(rename) => {
                            if KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(word)) {
                                return Err(Error::rewrite_ambiguity(format!(
                                    "keyword `{word}` reads as the logical identifier `{}`",
                                    rename.logical
                                )));
                            }

                            if std::ptr::eq(rename, table) {
                                saw_table = true;
                            }
                            push_quoted(&mut out, &rename.physical, self.quote);
                        }
                        None => {
                            if word.eq_ignore_ascii_case(&table.physical) {
                                saw_table = true;
                            }
                            out.push_str(word);
                        }
                    }
                }
            }
        }

        if !saw_table {
            return Err(Error::rewrite_ambiguity(format!(
                "table `{}` does not occur in the statement",
                table.logical
            )));
        }

        Ok(out)
    }
}

impl Serializer<'_> {
    /// Rewriter from the logical names of `object_type` to the physical
    /// names of its mapping, in this serializer's dialect and identifier
    /// case.
    pub fn rewriter(&self, object_type: &str) -> Result<IdentifierRewriter> {
        let Some(ty) = self.resolver().object_type(object_type) else {
            return Err(Error::not_found(object_type));
        };
        let Some(mapping) = self.resolver().resolve_mapping(object_type) else {
            return Err(Error::unresolved_mapping(object_type, None));
        };

        IdentifierRewriter::new(
            ty,
            mapping,
            self.case(),
            self.quote(),
            self.is_mysql(),
        )
    }

    /// Renders `plan` with logical names, then rewrites the text to physical
    /// names.
    pub fn render_rewritten(&self, plan: &Plan, params: &mut impl Params) -> Result<String> {
        let sql = self.render_logical(plan, params)?;
        self.rewriter(&plan.scan().object_type)?.rewrite(&sql)
    }
}
