use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The brand name is missing")]
    BrandName,
    #[error("The branch name is missing")]
    BranchName,
    #[error("The address is missing")]
    Address,
    #[error("The theme name is missing")]
    ThemeName,
    #[error("The address could not be resolved")]
    UnresolvedAddress,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid URL")]
    Url,
    #[error("The nickname is missing")]
    Nickname,
    #[error("Empty comment")]
    EmptyComment,
}
