use std::str::FromStr;

use assert_fs::prelude::*;
use futures::TryStreamExt;
use time::OffsetDateTime;

use notehive::config::{load_app_config, AppConfig, ProductionHasherConfigData};
use notehive::credential_validator::{
    CredentialValidator,
    CredentialValidatorImpl,
    ProductionCredentialValidator,
};
use notehive::data::{Note, NoteDraft, NotePatch, NoteUpdate, Role, UserDraft, UserUpdate};
use notehive::hasher::{Hasher, ProductionHasher};
use notehive::note_service::{
    NoteService,
    NoteServiceError,
    NoteServiceImpl,
    ProductionNoteService,
};
use notehive::note_store::InMemoryNoteStore;
use notehive::user_service::{ProductionUserService, UserService, UserServiceImpl};
use notehive::user_store::InMemoryUserStore;
use notehive::username_string::UsernameString;

// weak hashing parameters keep the tests fast
fn cheap_app_config() -> AppConfig {
    AppConfig {
        user_db: None,
        hasher_config: ProductionHasherConfigData {
            argon2_m_cost: 32,
            argon2_t_cost: 2,
            argon2_p_cost: 1,
            argon2_output_len: None,
        },
    }
}

fn make_hasher() -> ProductionHasher {
    ProductionHasher::from_app_config(&cheap_app_config())
        .expect("hasher initialization failed")
}

fn username(name: &str) -> UsernameString {
    UsernameString::from_str(name).unwrap()
}

#[tokio::test]
async fn note_crud_flow() {
    let notes: ProductionNoteService =
        NoteServiceImpl::new(InMemoryNoteStore::new());

    let created = notes.create(NoteDraft {
        title: "meeting notes".into(),
        content: Some("discussed requirements".into()),
        created_at: Some(OffsetDateTime::from_unix_timestamp(1).unwrap()),
        updated_at: None,
        owner_name: Some("John Doe".into()),
        owner_email: None,
    }).await.expect("create failed");
    assert_eq!(notes.get(created.id).await.expect("get failed"), created);

    let updated_at = OffsetDateTime::from_unix_timestamp(2).unwrap();
    let updated = notes.update(created.id, NoteUpdate {
        title: "meeting notes, final".into(),
        content: None,
        updated_at: Some(updated_at),
    }).await.expect("update failed");
    assert_eq!(updated.title, "meeting notes, final");
    assert_eq!(updated.content, None);
    assert_eq!(updated.updated_at, Some(updated_at));
    assert_eq!(updated.owner_name, created.owner_name);

    let patched = notes.patch(created.id, NotePatch {
        content: Some("final wording".into()),
        ..NotePatch::default()
    }).await.expect("patch failed");
    assert_eq!(patched.title, "meeting notes, final");
    assert_eq!(patched.content, Some("final wording".into()));

    let bulk = notes.create_bulk(vec![
        NoteDraft { title: "n1".into(), ..NoteDraft::default() },
        NoteDraft { title: "n2".into(), ..NoteDraft::default() },
        NoteDraft { title: "n3".into(), ..NoteDraft::default() },
    ]).await.expect("bulk create failed");
    assert_eq!(
        bulk.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(),
        vec!["n1", "n2", "n3"],
    );

    let listed: Vec<Note> = notes.list_all().try_collect().await
        .expect("listing failed");
    assert_eq!(listed.len(), 4);

    notes.delete(created.id).await.expect("delete failed");
    notes.delete(created.id).await.expect("repeated delete failed");
    let err = notes.get(created.id).await.expect_err("should fail");
    assert!(matches!(err, NoteServiceError::NotFound(id) if id == created.id));
}

#[tokio::test]
async fn runtime_user_flow() {
    let hasher = make_hasher();
    let store = InMemoryUserStore::new();
    let users: ProductionUserService =
        UserServiceImpl::new(hasher.clone(), store.clone());
    let validator: ProductionCredentialValidator =
        CredentialValidatorImpl::new(hasher, store);

    let created = users.create(UserDraft {
        name: username("alice"),
        password: "secret123".into(),
        role: Role::Admin,
        active: true,
    }).await.expect("create failed");
    assert_ne!(created.password_hash.as_str(), "secret123");

    assert!(validator.validate(&username("alice"), "secret123").await.unwrap());
    assert!(!validator.validate(&username("alice"), "wrong").await.unwrap());
    assert!(!validator.validate(&username("bob"), "anything").await.unwrap());

    let authenticated = validator
        .authenticate(&username("alice"), "secret123")
        .await.unwrap()
        .expect("should authenticate");
    assert_eq!(authenticated, created);

    users.update(&username("alice"), UserUpdate {
        password: "other456".into(),
        role: Role::User,
        active: false,
    }).await.expect("update failed");
    assert!(!validator.validate(&username("alice"), "secret123").await.unwrap());
    assert!(validator.validate(&username("alice"), "other456").await.unwrap());

    assert!(users.delete(&username("alice")).await.unwrap());
    assert!(!validator.validate(&username("alice"), "other456").await.unwrap());
}

#[tokio::test]
async fn config_and_seed_file_flow() {
    let hasher = make_hasher();
    let seeded_hash = hasher.generate_hash("secret123");

    let dir = assert_fs::TempDir::new().unwrap();
    let user_db = dir.child("users.toml");
    user_db.write_str(&format!(
        "[[user]]\n\
         username = \"admin\"\n\
         hash = \"{seeded_hash}\"\n\
         role = \"ADMIN\"\n\
         active = true\n"
    )).unwrap();

    let config_file = dir.child("notehive.toml");
    config_file.write_str(&format!(
        "user_db = {:?}\n\
         \n\
         [hasher_config]\n\
         argon2_m_cost = 32\n",
        user_db.path(),
    )).unwrap();

    let app_config = load_app_config(config_file.path())
        .expect("config loading failed");
    assert_eq!(app_config.user_db.as_deref(), Some(user_db.path()));
    assert_eq!(app_config.hasher_config.argon2_m_cost, 32);
    // untouched keys keep their defaults
    assert_eq!(
        app_config.hasher_config.argon2_t_cost,
        ProductionHasherConfigData::default().argon2_t_cost,
    );

    let store = InMemoryUserStore::from_app_config(&app_config)
        .await.expect("store bootstrap failed");
    let validator = CredentialValidatorImpl::new(
        ProductionHasher::from_app_config(&app_config).unwrap(),
        store.clone(),
    );
    assert!(validator.validate(&username("admin"), "secret123").await.unwrap());
    assert!(!validator.validate(&username("admin"), "wrong").await.unwrap());

    // runtime-created users share the seeded store
    let users = UserServiceImpl::new(make_hasher(), store);
    users.create(UserDraft {
        name: username("alice"),
        password: "hunter2hunter2".into(),
        role: Role::User,
        active: true,
    }).await.expect("create failed");
    assert!(validator.validate(&username("alice"), "hunter2hunter2").await.unwrap());
    assert_eq!(users.list_all().await.unwrap().len(), 2);
}
