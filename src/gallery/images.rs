use serde::{Deserialize, Serialize};

/// One displayable screenshot. `src` is never empty once it reaches an
/// [`ImageCollection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub src: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl ImageDescriptor {
    pub fn new(src: impl Into<String>, caption: Option<&str>) -> Self {
        Self {
            src: src.into(),
            caption: caption.map(str::to_string),
        }
    }
}

/// Screenshot entry as written in project front matter. Authors may leave
/// `src` out or write a `null` entry; those never make it past
/// [`ImageCollection::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl From<ImageDescriptor> for RawImage {
    fn from(value: ImageDescriptor) -> Self {
        Self {
            src: Some(value.src),
            caption: value.caption,
        }
    }
}

impl RawImage {
    fn into_descriptor(self) -> Option<ImageDescriptor> {
        let src = self.src.filter(|s| !s.is_empty())?;
        Some(ImageDescriptor {
            src,
            caption: self.caption.filter(|c| !c.is_empty()),
        })
    }
}

/// Ordered working set of valid screenshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCollection(Vec<ImageDescriptor>);

impl ImageCollection {
    /// Drops `None` entries and entries whose `src` is missing or empty,
    /// keeping the relative order of the rest. Any other string is passed
    /// through as written.
    pub fn normalize<I, T>(raw: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<RawImage>,
    {
        let images = raw
            .into_iter()
            .flatten()
            .filter_map(|img| img.into().into_descriptor())
            .collect();
        Self(images)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.0.iter()
    }
}

impl From<Vec<ImageDescriptor>> for ImageCollection {
    fn from(value: Vec<ImageDescriptor>) -> Self {
        Self::normalize(value.into_iter().map(Some))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(src: Option<&str>, caption: Option<&str>) -> Option<RawImage> {
        Some(RawImage {
            src: src.map(str::to_string),
            caption: caption.map(str::to_string),
        })
    }

    #[test]
    fn test_normalize_filters_missing_sources() {
        let input = vec![
            raw(Some("/projects/a.jpg"), Some("first")),
            None,
            raw(None, Some("orphan caption")),
            raw(Some(""), None),
            raw(Some("/projects/b.jpg"), None),
            raw(Some("/projects/c.jpg"), Some("third")),
        ];
        let len_in = input.len();
        let collection = ImageCollection::normalize(input);

        assert!(collection.len() <= len_in);
        let srcs = collection.iter().map(|i| i.src.as_str()).collect::<Vec<_>>();
        assert_eq!(srcs, vec!["/projects/a.jpg", "/projects/b.jpg", "/projects/c.jpg"]);
        assert!(collection.iter().all(|i| !i.src.is_empty()));
        assert_eq!(collection.get(0).and_then(|i| i.caption.as_deref()), Some("first"));
        assert_eq!(collection.get(1).and_then(|i| i.caption.as_deref()), None);
    }

    #[test]
    fn test_normalize_all_invalid_is_empty() {
        let collection = ImageCollection::normalize(vec![None, raw(None, None), raw(Some(""), None)]);
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.get(0).is_none());
    }

    #[test]
    fn test_empty_caption_dropped() {
        let collection = ImageCollection::from(vec![ImageDescriptor::new("a", Some(""))]);
        assert_eq!(collection.get(0).map(|i| i.caption.clone()), Some(None));
    }

    #[test]
    fn test_only_empty_src_is_filtered() {
        let collection = ImageCollection::normalize(vec![
            raw(Some(" "), Some(" ")),
            raw(Some(""), Some("gone")),
        ]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).map(|i| i.src.as_str()), Some(" "));
        assert_eq!(collection.get(0).and_then(|i| i.caption.as_deref()), Some(" "));
    }

    #[test]
    fn test_front_matter_shape() {
        let json = r#"[{"src": "/projects/a.jpg", "caption": "hi"}, null, {"caption": "no src"}]"#;
        let raw: Vec<Option<RawImage>> = serde_json::from_str(json).unwrap();
        let collection = ImageCollection::normalize(raw);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).unwrap().src, "/projects/a.jpg");
    }
}
