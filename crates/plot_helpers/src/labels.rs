//! Arabic labeling of axes
//!
//! Titles and axis labels are shaped for display directly. Tick labels are
//! recovered by reverse lookup: each label currently shown on the axis is
//! matched against the dictionary's values, and the keys of every matching
//! entry become the new labels.
//!
//! The lookup does not enforce one match per tick. A tick with no matching
//! value contributes nothing and a value shared by several keys contributes
//! all of them, so the new label list can be shorter or longer than the
//! axis' tick count. [`charts::Axis::set_tick_labels`] logs the mismatch and
//! the renderer pairs labels with ticks by position.

use charts::{Axes, AxisKind};
use text_engine::DisplayPipeline;

/// Insertion-ordered mapping from internal keys to displayed values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDictionary {
    entries: Vec<(String, String)>,
}

impl LabelDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced key keeps its original position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every key mapped to `value`, in insertion order
    pub fn keys_for<'a>(&'a self, value: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(_, v)| v == value)
            .map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for LabelDictionary {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for LabelDictionary {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Map tick labels back to dictionary keys and shape the keys for display.
///
/// Outer loop over `current`, inner loop over the dictionary in insertion
/// order; every matching key is emitted.
pub fn translate_tick_labels(
    current: &[String],
    dictionary: &LabelDictionary,
    pipeline: &DisplayPipeline,
) -> Vec<String> {
    current
        .iter()
        .flat_map(|label| dictionary.keys_for(label))
        .map(|key| pipeline.shape(key))
        .collect()
}

/// Applies Arabic labels to axes through a configurable pipeline
#[derive(Debug, Clone, Default)]
pub struct ArabicLabeler {
    pipeline: DisplayPipeline,
}

impl ArabicLabeler {
    pub fn new(pipeline: DisplayPipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &DisplayPipeline {
        &self.pipeline
    }

    /// Label the axes and translate the x tick labels
    pub fn apply_horizontal(
        &self,
        axes: &mut Axes,
        dictionary: &LabelDictionary,
        title: &str,
        xlabel: &str,
        ylabel: &str,
    ) {
        self.apply(axes, AxisKind::X, dictionary, title, xlabel, ylabel);
    }

    /// Label the axes and translate the y tick labels
    pub fn apply_vertical(
        &self,
        axes: &mut Axes,
        dictionary: &LabelDictionary,
        title: &str,
        xlabel: &str,
        ylabel: &str,
    ) {
        self.apply(axes, AxisKind::Y, dictionary, title, xlabel, ylabel);
    }

    fn apply(
        &self,
        axes: &mut Axes,
        target: AxisKind,
        dictionary: &LabelDictionary,
        title: &str,
        xlabel: &str,
        ylabel: &str,
    ) {
        axes.set_title(self.pipeline.shape(title));
        axes.set_xlabel(self.pipeline.shape(xlabel));
        axes.set_ylabel(self.pipeline.shape(ylabel));

        let current = axes.axis(target).tick_labels().to_vec();
        let labels = translate_tick_labels(&current, dictionary, &self.pipeline);
        tracing::debug!(
            axis = ?target,
            ticks = current.len(),
            labels = labels.len(),
            "translated tick labels"
        );
        axes.axis_mut(target).set_tick_labels(labels);
    }
}

/// Arabic title and axis labels; x tick labels translated through `dictionary`
pub fn apply_labels_horizontal(
    axes: &mut Axes,
    dictionary: &LabelDictionary,
    title: &str,
    xlabel: &str,
    ylabel: &str,
) {
    ArabicLabeler::default().apply_horizontal(axes, dictionary, title, xlabel, ylabel);
}

/// Arabic title and axis labels; y tick labels translated through `dictionary`
pub fn apply_labels_vertical(
    axes: &mut Axes,
    dictionary: &LabelDictionary,
    title: &str,
    xlabel: &str,
    ylabel: &str,
) {
    ArabicLabeler::default().apply_vertical(axes, dictionary, title, xlabel, ylabel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_engine::shape_for_display;

    const OLIVE: &str = "\u{0632}\u{064A}\u{062A}\u{0648}\u{0646}";
    const PALM: &str = "\u{0646}\u{062E}\u{064A}\u{0644}";
    const HARVEST: &str = "\u{0627}\u{0644}\u{0625}\u{0646}\u{062A}\u{0627}\u{062C}";
    const TREES: &str = "\u{0627}\u{0644}\u{0634}\u{062C}\u{0631}";
    const TONS: &str = "\u{0637}\u{0646}";

    fn translate(current: &[&str], dictionary: &LabelDictionary) -> Vec<String> {
        let current: Vec<String> = current.iter().map(|s| s.to_string()).collect();
        translate_tick_labels(&current, dictionary, &DisplayPipeline::default())
    }

    #[test]
    fn test_dictionary_keeps_insertion_order_on_replace() {
        let mut dictionary = LabelDictionary::from([("b", "2"), ("a", "1")]);
        assert_eq!(dictionary.insert("b", "3"), Some("2".to_string()));
        let keys: Vec<&str> = dictionary.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(dictionary.get("b"), Some("3"));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_translate_one_to_one() {
        let dictionary = LabelDictionary::from([("a", "X"), ("b", "Y")]);
        let result = translate(&["X", "Y"], &dictionary);
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn test_translate_follows_tick_order() {
        let dictionary = LabelDictionary::from([("a", "X"), ("b", "Y")]);
        let result = translate(&["Y", "X"], &dictionary);
        assert_eq!(result, vec!["b", "a"]);
    }

    #[test]
    fn test_unmatched_tick_drops_entry() {
        let dictionary = LabelDictionary::from([("a", "X")]);
        let result = translate(&["X", "Z"], &dictionary);
        assert_eq!(result, vec!["a"]);
    }

    #[test]
    fn test_shared_value_inflates_list() {
        let dictionary = LabelDictionary::from([("a", "X"), ("b", "X"), ("c", "Y")]);
        let result = translate(&["X", "Y"], &dictionary);
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_keys_are_shaped() {
        let dictionary = LabelDictionary::from([(OLIVE, "olive")]);
        let result = translate(&["olive"], &dictionary);
        assert_eq!(result, vec![shape_for_display(OLIVE)]);
        assert_ne!(result[0], OLIVE);
    }

    #[test]
    fn test_apply_horizontal_sets_labels() {
        let mut axes = Axes::default();
        axes.bar(&["olive", "palm"], &[4.0, 6.0]);
        let dictionary = LabelDictionary::from([(OLIVE, "olive"), (PALM, "palm")]);

        apply_labels_horizontal(&mut axes, &dictionary, HARVEST, TREES, TONS);

        assert_eq!(
            axes.title().map(|t| t.text.clone()),
            Some(shape_for_display(HARVEST))
        );
        assert_eq!(
            axes.x_axis().label().map(|l| l.text.clone()),
            Some(shape_for_display(TREES))
        );
        assert_eq!(axes.xticklabels().len(), 2);
        assert_eq!(axes.xticklabels()[1], shape_for_display(PALM));
        // y ticks untouched
        assert!(axes.yticklabels().iter().all(|l| l.is_ascii()));
    }

    #[test]
    fn test_apply_vertical_targets_y_axis() {
        let mut axes = Axes::default();
        axes.barh(&["X", "Y"], &[1.0, 2.0]);
        let before_x = axes.xticklabels().to_vec();
        let dictionary = LabelDictionary::from([("a", "X"), ("b", "Y")]);

        apply_labels_vertical(&mut axes, &dictionary, "t", "x", "y");

        assert_eq!(axes.yticklabels(), &["a", "b"]);
        assert_eq!(axes.xticklabels(), before_x.as_slice());
    }
}
