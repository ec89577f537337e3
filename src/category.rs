//! The fixed category table.
//!
//! Four named categories plus the implicit catch-all `Others`. The table is
//! built once and never mutated; lookups are by lowercased, dotted extension.

use std::collections::HashMap;

/// One of the fixed classification buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Images,
    Documents,
    Videos,
    Music,
    /// Catch-all for extensions the table does not know (and for files with
    /// no extension at all). Never appears in the extension table itself.
    Others,
}

impl Category {
    /// Working-set order: table insertion order, `Others` last. Governs the
    /// collision pre-pass and the summary printout.
    pub const ALL: [Category; 5] = [
        Category::Images,
        Category::Documents,
        Category::Videos,
        Category::Music,
        Category::Others,
    ];

    /// The subfolder name for this category.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Videos => "Videos",
            Category::Music => "Music",
            Category::Others => "Others",
        }
    }
}

/// Maps file extensions to categories.
///
/// Extensions are stored lowercased with the leading dot. The sets are
/// disjoint across categories, so a hash lookup answers "first table match"
/// exactly.
#[derive(Debug, Clone)]
pub struct CategoryMapper {
    extension_map: HashMap<String, Category>,
}

impl CategoryMapper {
    /// Creates a mapper holding the fixed table.
    pub fn new() -> Self {
        let mut mapper = Self {
            extension_map: HashMap::new(),
        };
        mapper.populate_table();
        mapper
    }

    fn populate_table(&mut self) {
        for ext in [".jpg", ".jpeg", ".png", ".bmp"] {
            self.add_extension_mapping(ext, Category::Images);
        }
        for ext in [".txt", ".pdf", ".docx", ".doc", ".xlsx", ".pptx", ".csv"] {
            self.add_extension_mapping(ext, Category::Documents);
        }
        for ext in [".mp4", ".mkv", ".wmv"] {
            self.add_extension_mapping(ext, Category::Videos);
        }
        for ext in [".mp3", ".wav"] {
            self.add_extension_mapping(ext, Category::Music);
        }
    }

    fn add_extension_mapping(&mut self, ext: &str, category: Category) {
        let previous = self.extension_map.insert(ext.to_lowercase(), category);
        debug_assert!(previous.is_none(), "extension {ext} mapped twice");
    }

    /// Looks up a dotted extension, any letter case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortdir::category::{Category, CategoryMapper};
    ///
    /// let mapper = CategoryMapper::default();
    /// assert_eq!(mapper.extension_to_category(".pdf"), Some(Category::Documents));
    /// assert_eq!(mapper.extension_to_category(".JPG"), Some(Category::Images));
    /// assert_eq!(mapper.extension_to_category(".zip"), None);
    /// ```
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        self.extension_map.get(&ext.to_lowercase()).copied()
    }

    /// Determines the category for a file extension, defaulting to `Others`
    /// when the extension is unknown or absent.
    pub fn categorize(&self, ext: Option<&str>) -> Category {
        ext.and_then(|e| self.extension_to_category(e))
            .unwrap_or(Category::Others)
    }

    /// Number of extensions in the table.
    #[allow(dead_code)]
    pub fn table_len(&self) -> usize {
        self.extension_map.len()
    }
}

impl Default for CategoryMapper {
    fn default() -> Self {
        Self::new()
    }
}
