use dragon_i18n::{I18n, Options, ParserRegistry};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), dragon_i18n::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // I18N__DEFAULT_LANG=en-us switches the language without touching code.
    let options = Options::builder()
        .with_env("I18N", "__")
        .lang_directory("demos/language")
        .build()?;

    let i18n = I18n::builder()
        .with_options(options)
        .with_registry(ParserRegistry::with_defaults())
        .build()?;

    println!("{}", i18n.get_or("error.test", ""));
    println!("{}", i18n.get_or("error.err2.bb.cc", ""));
    println!("{}", i18n.get_or("error.err2.bb.as", "hello"));

    Ok(())
}
