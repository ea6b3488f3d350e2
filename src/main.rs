// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{App, Flags};
use iced_toasts::ui::theming::ThemeMode;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        theme: args
            .opt_value_from_str::<_, ThemeMode>("--theme")
            .unwrap_or(None),
    };

    iced::application(move || App::boot(flags), App::update, App::view)
        .title("Toasts")
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((480.0, 640.0))
        .run()
}
