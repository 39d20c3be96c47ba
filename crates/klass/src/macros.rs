/// Builds [`Conditions`](crate::Conditions) in the order written.
///
/// ```rust
/// let conditions = klass::conditions! { "current" => true, "act" => 1 > 2 };
/// assert_eq!(conditions.active().collect::<Vec<_>>(), ["current"]);
/// ```
#[macro_export]
macro_rules! conditions {
    () => {
        $crate::Conditions::new()
    };
    ($($name:expr => $active:expr),+ $(,)?) => {{
        let mut conditions = $crate::Conditions::new();
        $( conditions.insert($name, $active); )+
        conditions
    }};
}

/// Builds a [`Spec::Batch`](crate::Spec::Batch) from anything convertible into an
/// [`Element`](crate::Element).
///
/// ```rust
/// use klass::{batch, conditions, Settings};
///
/// let spec = batch!["comp", "current", conditions! { "act" => true, "haha" => false }];
/// assert_eq!(Settings::default().render(Some(&spec), None, None), "comp current act");
/// ```
#[macro_export]
macro_rules! batch {
    ($($element:expr),* $(,)?) => {
        $crate::Spec::Batch(::std::vec![$($crate::Element::from($element)),*])
    };
}
