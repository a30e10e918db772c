use super::{Formatter, Params, ToSql};

use crate::stmt::Ident;

impl ToSql for &Ident {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let quote = f.serializer.quote();
        push_quoted(f.dst, self.as_str(), quote);
    }
}

/// Writes `ident` wrapped in `quote`, doubling embedded quote characters.
pub(crate) fn push_quoted(dst: &mut String, ident: &str, quote: char) {
    dst.push(quote);
    for ch in ident.chars() {
        if ch == quote {
            dst.push(quote);
        }
        dst.push(ch);
    }
    dst.push(quote);
}
