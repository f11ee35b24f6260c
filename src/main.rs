fn main() -> anyhow::Result<()> {
    todo_list::cli::run()
}
