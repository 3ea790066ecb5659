pub mod firestore;

pub use firestore::FirestoreStore;
