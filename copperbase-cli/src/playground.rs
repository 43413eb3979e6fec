//! The playground runner -- the ordered demo sequence.
//!
//! Exercises the four resource groups in a fixed order, threading every
//! identifier produced by an earlier step into the steps that consume it.
//! Each step prints a banner, invokes one remote operation, and prints the
//! serialized result (or a fixed confirmation string for deletes).
//!
//! The run is fail-fast: the first fault propagates out of [`Playground::run`]
//! and aborts the remaining sequence. Resources already created on the remote
//! backend are left behind in that case; there is no rollback.
//!
//! The only ordering constraint beyond the fixed sequence itself: the five
//! attribute creations for the Movies collection must complete, and the
//! schema-propagation wait must elapse, before the fulltext index over
//! `["name", "email"]` is requested.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value, json};

use copperbase_core::api::{DatabasesApi, FunctionsApi, StorageApi, UsersApi};
use copperbase_core::error::CopperbaseError;
use copperbase_core::permission::{Permission, Role};
use copperbase_core::types::{InputFile, unique_id};
use copperbase_core::wait::WaitPolicy;

/// Demo document payload for the Movies collection.
fn movie_document() -> Value {
    json!({
        "name": "Spider Man",
        "release_year": 1920,
        "rating": 98.5,
        "kids": false,
    })
}

/// Print a record as pretty JSON.
fn print_record<T: Serialize>(record: &T) {
    let rendered = serde_json::to_string_pretty(record)
        .unwrap_or_else(|e| format!("(serialization error: {e})"));
    println!("{rendered}");
}

/// The demo runner, generic over the four service groups.
///
/// The generic seams exist so tests can substitute call-recording mocks for
/// the HTTP services.
pub struct Playground<U, D, F, S> {
    users: U,
    databases: D,
    functions: F,
    storage: S,
    wait: WaitPolicy,
    upload_path: PathBuf,
}

impl<U, D, F, S> Playground<U, D, F, S>
where
    U: UsersApi,
    D: DatabasesApi,
    F: FunctionsApi,
    S: StorageApi,
{
    /// Assemble a runner from the four services, a wait policy, and the
    /// local file used by the upload step.
    pub fn new(
        users: U,
        databases: D,
        functions: F,
        storage: S,
        wait: WaitPolicy,
        upload_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            users,
            databases,
            functions,
            storage,
            wait,
            upload_path: upload_path.into(),
        }
    }

    /// Run the full demo sequence.
    ///
    /// Identifiers are threaded as explicit values: every id is returned by
    /// its producing step and passed to the steps that consume it, so no
    /// consumer can run before its producer.
    pub async fn run(&self) -> Result<(), CopperbaseError> {
        let user_id = self.create_user().await?;
        self.list_users().await?;
        self.delete_user(&user_id).await?;

        let database_id = self.create_database().await?;
        let collection_id = self.create_collection(&database_id).await?;
        self.list_collections(&database_id).await?;
        let document_id = self.create_document(&database_id, &collection_id).await?;
        self.list_documents(&database_id, &collection_id).await?;
        self.delete_document(&database_id, &collection_id, &document_id)
            .await?;
        self.delete_collection(&database_id, &collection_id).await?;
        self.delete_database(&database_id).await?;

        let function_id = self.create_function().await?;
        self.list_functions().await?;
        self.delete_function(&function_id).await?;

        let bucket_id = self.create_bucket().await?;
        self.list_buckets().await?;
        let file_id = self.upload_file(&bucket_id).await?;
        self.list_files(&bucket_id).await?;
        self.delete_file(&bucket_id, &file_id).await?;

        println!("Ran playground successfully!");
        Ok(())
    }

    // ---- users ----

    async fn create_user(&self) -> Result<String, CopperbaseError> {
        println!("Running create user API");
        let email = format!("{}@copperbase.dev", unique_id());
        let user = self
            .users
            .create(&unique_id(), &email, None, "user@123", "Rust Player")
            .await?;
        print_record(&user);
        Ok(user.id)
    }

    async fn list_users(&self) -> Result<(), CopperbaseError> {
        println!("Running list users API");
        let users = self.users.list().await?;
        print_record(&users);
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), CopperbaseError> {
        println!("Running delete user API");
        self.users.delete(user_id).await?;
        println!("User deleted");
        Ok(())
    }

    // ---- databases ----

    async fn create_database(&self) -> Result<String, CopperbaseError> {
        println!("Running create database API");
        let database = self.databases.create(&unique_id(), "Movies").await?;
        print_record(&database);
        Ok(database.id)
    }

    /// Create the Movies collection and its schema.
    ///
    /// The five attribute creations must all be issued before the index that
    /// covers them, with the wait policy's settle in between: the backend
    /// propagates schema changes asynchronously and rejects indexes over
    /// attributes that are still processing.
    async fn create_collection(&self, database_id: &str) -> Result<String, CopperbaseError> {
        println!("Running create collection API");
        let collection = self
            .databases
            .create_collection(
                database_id,
                "movies",
                "Movies",
                &[
                    Permission::create(Role::users()),
                    Permission::read(Role::users()),
                    Permission::update(Role::users()),
                    Permission::delete(Role::users()),
                ],
                true,
            )
            .await?;
        print_record(&collection);
        let collection_id = collection.id;

        println!("Running create string attribute");
        let str_attr = self
            .databases
            .create_string_attribute(
                database_id,
                &collection_id,
                "name",
                255,
                true,
                Some(""),
                false,
            )
            .await?;
        print_record(&str_attr);

        println!("Running create integer attribute");
        let int_attr = self
            .databases
            .create_integer_attribute(database_id, &collection_id, "release_year", true, 0, 9999)
            .await?;
        print_record(&int_attr);

        println!("Running create float attribute");
        let float_attr = self
            .databases
            .create_float_attribute(database_id, &collection_id, "rating", true, 0.0, 99.99)
            .await?;
        print_record(&float_attr);

        println!("Running create boolean attribute");
        let bool_attr = self
            .databases
            .create_boolean_attribute(database_id, &collection_id, "kids", true)
            .await?;
        print_record(&bool_attr);

        println!("Running create email attribute");
        let email_attr = self
            .databases
            .create_email_attribute(database_id, &collection_id, "email", false, Some(""))
            .await?;
        print_record(&email_attr);

        self.wait.settle().await;

        println!("Running create index");
        let index = self
            .databases
            .create_index(
                database_id,
                &collection_id,
                "name_email_idx",
                "fulltext",
                &["name", "email"],
            )
            .await?;
        print_record(&index);

        Ok(collection_id)
    }

    async fn list_collections(&self, database_id: &str) -> Result<(), CopperbaseError> {
        println!("Running list collection API");
        let collections = self.databases.list_collections(database_id).await?;
        print_record(&collections);
        Ok(())
    }

    async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<String, CopperbaseError> {
        println!("Running Add Document API");
        let document = self
            .databases
            .create_document(
                database_id,
                collection_id,
                &unique_id(),
                movie_document(),
                &[
                    Permission::read(Role::users()),
                    Permission::update(Role::users()),
                    Permission::delete(Role::users()),
                ],
            )
            .await?;
        print_record(&document);
        Ok(document.id)
    }

    async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<(), CopperbaseError> {
        println!("Running List Document API");
        let documents = self
            .databases
            .list_documents(database_id, collection_id)
            .await?;
        print_record(&documents);
        Ok(())
    }

    async fn delete_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<(), CopperbaseError> {
        println!("Running Delete Document API");
        self.databases
            .delete_document(database_id, collection_id, document_id)
            .await?;
        println!("Document Deleted");
        Ok(())
    }

    async fn delete_collection(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<(), CopperbaseError> {
        println!("Running delete collection API");
        self.databases
            .delete_collection(database_id, collection_id)
            .await?;
        println!("Collection Deleted");
        Ok(())
    }

    async fn delete_database(&self, database_id: &str) -> Result<(), CopperbaseError> {
        println!("Running delete database API");
        self.databases.delete(database_id).await?;
        println!("Database deleted");
        Ok(())
    }

    // ---- functions ----

    async fn create_function(&self) -> Result<String, CopperbaseError> {
        println!("Running Create Function API");
        let function = self
            .functions
            .create(&unique_id(), "Test Function", &[Role::any()], "php-8.0")
            .await?;

        let variable = self
            .functions
            .create_variable(&function.id, "ENV", "value")
            .await?;

        print_record(&function);
        print_record(&variable);
        Ok(function.id)
    }

    async fn list_functions(&self) -> Result<(), CopperbaseError> {
        println!("Running List Functions API");
        let functions = self.functions.list().await?;
        print_record(&functions);
        Ok(())
    }

    async fn delete_function(&self, function_id: &str) -> Result<(), CopperbaseError> {
        println!("Running Delete Function API");
        self.functions.delete(function_id).await?;
        println!("Function Deleted");
        Ok(())
    }

    // ---- storage ----

    async fn create_bucket(&self) -> Result<String, CopperbaseError> {
        println!("Running Create Bucket API");
        let bucket = self
            .storage
            .create_bucket(
                &unique_id(),
                "Name",
                &[
                    Permission::read(Role::any()),
                    Permission::create(Role::users()),
                    Permission::update(Role::users()),
                    Permission::delete(Role::users()),
                ],
                true,
            )
            .await?;
        print_record(&bucket);
        Ok(bucket.id)
    }

    async fn list_buckets(&self) -> Result<(), CopperbaseError> {
        println!("Running List Buckets API");
        let buckets = self.storage.list_buckets().await?;
        print_record(&buckets);
        Ok(())
    }

    async fn upload_file(&self, bucket_id: &str) -> Result<String, CopperbaseError> {
        println!("Running Upload File API");
        let input = InputFile::from_path(&self.upload_path);
        let file = self
            .storage
            .create_file(
                bucket_id,
                &unique_id(),
                &input,
                &[Permission::update(Role::any())],
            )
            .await?;
        print_record(&file);
        Ok(file.id)
    }

    async fn list_files(&self, bucket_id: &str) -> Result<(), CopperbaseError> {
        println!("Running List File API");
        let files = self.storage.list_files(bucket_id).await?;
        print_record(&files);
        Ok(())
    }

    async fn delete_file(&self, bucket_id: &str, file_id: &str) -> Result<(), CopperbaseError> {
        println!("Running Delete File API");
        self.storage.delete_file(bucket_id, file_id).await?;
        println!("File Deleted");
        Ok(())
    }
}
