use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A record referenced by a foreign key disappeared while loading related data.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("{entity} {id} referenced by {referrer} is missing")]
    MissingRelation {
        entity: &'static str,
        id: i32,
        referrer: String,
    },

    /// Stored record was inserted but could not be read back.
    #[error("{entity} {id} not found after creation")]
    MissingAfterInsert { entity: &'static str, id: i32 },
}
