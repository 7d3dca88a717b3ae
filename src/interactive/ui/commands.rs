#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    ExecuteFetch,
}
