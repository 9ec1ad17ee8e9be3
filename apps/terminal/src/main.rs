fn main() -> anyhow::Result<()> {
    kana_flashcards_terminal::run()
}
