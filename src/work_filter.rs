use crate::config::WorkItem;

pub const ALL_FILTER: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            ALL_FILTER => Self::All,
            other => Self::Category(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::All => ALL_FILTER,
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category.trim(),
        }
    }

    pub fn label(&self) -> String {
        let tag = self.tag();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Filter buttons: `all` followed by each distinct category in first-seen order.
pub fn filters_for(items: &[WorkItem]) -> Vec<Filter> {
    let mut filters = vec![Filter::All];
    for item in items {
        let filter = Filter::from_tag(&item.category);
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkFilter {
    active: Filter,
}

impl Default for WorkFilter {
    fn default() -> Self {
        Self {
            active: Filter::All,
        }
    }
}

impl WorkFilter {
    pub fn select(&mut self, filter: Filter) {
        self.active = filter;
    }

    pub fn is_button_active(&self, button: &Filter) -> bool {
        &self.active == button
    }

    pub fn is_visible(&self, item: &WorkItem) -> bool {
        self.active.matches(&item.category)
    }

    pub fn visibility(&self, items: &[WorkItem]) -> Vec<bool> {
        items.iter().map(|item| self.is_visible(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, category: &str) -> WorkItem {
        WorkItem {
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
            image: None,
            link: None,
        }
    }

    fn items() -> Vec<WorkItem> {
        vec![item("a", "web"), item("b", "mobile"), item("c", "web")]
    }

    #[test]
    fn all_filter_shows_everything() {
        let filter = WorkFilter::default();
        assert_eq!(filter.visibility(&items()), vec![true, true, true]);
        assert!(filter.is_button_active(&Filter::All));
    }

    #[test]
    fn category_filter_shows_matching_items_only() {
        let mut filter = WorkFilter::default();
        filter.select(Filter::from_tag("web"));
        assert_eq!(filter.visibility(&items()), vec![true, false, true]);
        assert!(!filter.is_button_active(&Filter::All));
        assert!(filter.is_button_active(&Filter::Category("web".to_string())));
    }

    #[test]
    fn zero_match_category_hides_all_and_deselects_all_button() {
        let mut filter = WorkFilter::default();
        filter.select(Filter::from_tag("print"));
        assert!(filter.visibility(&items()).iter().all(|visible| !visible));
        assert!(!filter.is_button_active(&Filter::All));
    }

    #[test]
    fn categories_are_case_sensitive() {
        let mut filter = WorkFilter::default();
        filter.select(Filter::from_tag("Web"));
        assert!(filter.visibility(&items()).iter().all(|visible| !visible));
    }

    #[test]
    fn buttons_are_distinct_in_first_seen_order() {
        let tags: Vec<String> = filters_for(&items())
            .iter()
            .map(|filter| filter.tag().to_string())
            .collect();
        assert_eq!(tags, vec!["all", "web", "mobile"]);
    }

    #[test]
    fn label_capitalises_tag() {
        assert_eq!(Filter::All.label(), "All");
        assert_eq!(Filter::from_tag("design").label(), "Design");
    }
}
