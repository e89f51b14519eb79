/// Singularizes table names to derive class names.
pub trait Inflector {
    fn singular(&self, name: &str) -> String;
}

/// The default inflector, backed by the `pluralizer` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pluralizer;

impl Inflector for Pluralizer {
    fn singular(&self, name: &str) -> String {
        // Words the inflection rules get wrong
        match name.to_ascii_lowercase().as_str() {
            "campus" | "meta" | "metadata" => return name.to_string(),
            "calories" => return "calorie".to_string(),
            "waves" => return "wave".to_string(),
            _ => {}
        }

        pluralizer::pluralize(name, 1, false)
    }
}

impl<F> Inflector for F
where
    F: Fn(&str) -> String,
{
    fn singular(&self, name: &str) -> String {
        self(name)
    }
}
