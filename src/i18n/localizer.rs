use crate::display::{Message, MessageArg};

/// Looks up user-facing text by key.
///
/// Implementations substitute positional arguments into `$1`, `$2`, ...
/// placeholders of the template.
pub trait Localizer {
    fn t(&self, key: &str, args: &[String]) -> String;

    // resolve a plan message, looking up key arguments first
    fn message(&self, message: &Message) -> String {
        let args: Vec<String> = message
            .args
            .iter()
            .map(|arg| match arg {
                MessageArg::Key(key) => self.t(key, &[]),
                MessageArg::Text(text) => text.clone(),
            })
            .collect();
        self.t(&message.key, &args)
    }
}

// Replace $1..$n in a template. Highest index first so $1 never eats $10.
pub fn substitute(template: &str, args: &[String]) -> String {
    let mut text = template.to_string();
    for (index, arg) in args.iter().enumerate().rev() {
        text = text.replace(&format!("${}", index + 1), arg);
    }
    text
}
