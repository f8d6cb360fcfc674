use iced_brief::app::{self, paths, Flags};
use iced_brief::content;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap();
    let config_dir = args.opt_value_from_str("--config-dir").unwrap();
    paths::init_cli_overrides(config_dir);

    let page = match content::load() {
        Ok(page) => page,
        Err(error) => {
            eprintln!("Failed to load embedded page content: {:?}", error);
            std::process::exit(1);
        }
    };

    app::run(Flags { lang, page })
}
