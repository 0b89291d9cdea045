use indexmap::IndexSet;

use crate::collation::Collation;
use crate::config::LabelsSection;
use crate::creator::Creator;
use crate::filter::SortMode;

/// One entry of a selection control. An empty `value` means "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn any(label: impl Into<String>) -> Self {
        Self::new(String::new(), label)
    }

    pub fn is_any(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<String> for SelectOption {
    fn from(value: String) -> Self {
        SelectOption::new(value.clone(), value)
    }
}

/// Distinct non-empty values of a (possibly multi-valued) field, collated.
pub fn distinct_values<'a, F, I>(
    creators: &'a [Creator],
    extract: F,
    collation: &impl Collation,
) -> Vec<String>
where
    F: Fn(&'a Creator) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let mut values: Vec<String> = creators
        .iter()
        .flat_map(extract)
        .filter(|value| !value.is_empty())
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    values.sort_by(|a, b| collation.compare(a, b));
    values
}

/// Options for a selection control: the "any" sentinel first, then every distinct value.
pub fn build_options<'a, F, I>(
    creators: &'a [Creator],
    extract: F,
    any_label: &str,
    collation: &impl Collation,
) -> Vec<SelectOption>
where
    F: Fn(&'a Creator) -> I,
    I: IntoIterator<Item = &'a str>,
{
    std::iter::once(SelectOption::any(any_label))
        .chain(
            distinct_values(creators, extract, collation)
                .into_iter()
                .map(SelectOption::from),
        )
        .collect()
}

pub fn sort_options() -> Vec<SelectOption> {
    SortMode::ALL
        .into_iter()
        .map(|mode| SelectOption::new(mode.as_str(), mode.label()))
        .collect()
}

/// Option lists for every filterable field, built once after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub bases: Vec<SelectOption>,
    pub tags: Vec<SelectOption>,
    pub roles: Vec<SelectOption>,
}

impl FilterOptions {
    pub fn from_creators(
        creators: &[Creator],
        labels: &LabelsSection,
        collation: &impl Collation,
    ) -> Self {
        Self {
            bases: build_options(
                creators,
                |c| std::iter::once(c.base.as_str()),
                &labels.all_bases,
                collation,
            ),
            tags: build_options(
                creators,
                |c| c.tags.iter().map(String::as_str),
                &labels.all_tags,
                collation,
            ),
            roles: build_options(
                creators,
                |c| c.role.iter().map(String::as_str),
                &labels.all_roles,
                collation,
            ),
        }
    }

    /// Only the "any" sentinel in each list.
    pub fn empty(labels: &LabelsSection) -> Self {
        Self {
            bases: vec![SelectOption::any(&labels.all_bases)],
            tags: vec![SelectOption::any(&labels.all_tags)],
            roles: vec![SelectOption::any(&labels.all_roles)],
        }
    }
}
