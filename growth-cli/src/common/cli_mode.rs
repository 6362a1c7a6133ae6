/// Whether a handler consumed the invocation.
pub enum CliModeResult {
    Finish,
    NothingToDo,
}
