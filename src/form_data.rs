/// Ordered form fields for a POST upload.
///
/// Field order and casing are significant: the storage service matches
/// field names case-sensitively, and all of these fields must precede
/// the binary `file` field in the multipart request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
    pub(crate) fn new(fields: Vec<(String, String)>) -> Self {
        Self(fields)
    }

    /// Returns the value of the field with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Converts `self` into a `Vec<(String, String)>`.
    /// The first element of each tuple is the field name, and the second
    /// element is the field value.
    pub fn into_vec(self) -> Vec<(String, String)> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_iter() {
        let form = FormData::new(vec![
            ("key".to_string(), "object_name1".to_string()),
            ("policy".to_string(), "e30=".to_string()),
        ]);
        assert_eq!(form.get("key"), Some("object_name1"));
        assert_eq!(form.get("Key"), None);
        assert_eq!(
            form.iter().collect::<Vec<(&str, &str)>>(),
            vec![("key", "object_name1"), ("policy", "e30=")]
        );
    }

    #[test]
    fn test_into_vec_keeps_order() {
        let fields = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ];
        assert_eq!(FormData::new(fields.clone()).into_vec(), fields);
    }
}
