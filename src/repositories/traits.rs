use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between sessions.
///
/// The whole book is loaded once at startup and saved once at exit.
/// Implementations must round-trip exactly: a saved book loads back with the
/// same records, phones and birthdays, in the same order.
pub trait AddressBookRepository {
    /// Load the stored book, or an empty book if nothing was stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
