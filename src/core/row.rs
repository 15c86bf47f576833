//! Named-field CSV row.

/// One CSV record as an ordered list of `(column, value)` pairs.
///
/// Column order follows the header the row was decoded with. Encoding back
/// to a record is always done against an explicit header, so the column
/// set of a single row never has to match the output layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Zip header names with record fields.
    ///
    /// A short record yields a row without the trailing columns; surplus
    /// fields with no header name are dropped.
    pub fn from_record<'a, H, F>(headers: H, fields: F) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        F: IntoIterator<Item = &'a str>,
    {
        let fields = headers
            .into_iter()
            .zip(fields)
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        Row { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|(c, _)| c == column)
    }

    /// Remove a column, returning its value.
    pub fn remove(&mut self, column: &str) -> Option<String> {
        let pos = self.fields.iter().position(|(c, _)| c == column)?;
        Some(self.fields.remove(pos).1)
    }

    /// Overwrite a column in place, or append it when absent.
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(c, _)| c == column) {
            Some((_, v)) => *v = value,
            None => self.fields.push((column.to_string(), value)),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Lay the row out against `headers`; missing columns become empty strings.
    pub fn to_record<S: AsRef<str>>(&self, headers: &[S]) -> Vec<&str> {
        headers
            .iter()
            .map(|h| self.get(h.as_ref()).unwrap_or(""))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
