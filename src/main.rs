use phonebook::errors::AppError;

fn main() -> Result<(), AppError> {
    phonebook::cli::run_app()
}
