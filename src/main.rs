use gitbind::ui::output;

fn main() {
    if let Err(err) = gitbind::cli::run() {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
