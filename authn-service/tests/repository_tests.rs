mod common;

use std::sync::Arc;

use authn_service::domain::authn_role::errors::AuthNRoleError;
use authn_service::domain::authn_role::models::AuthNRole;
use authn_service::domain::authn_role::models::RoleName;
use authn_service::domain::authn_role::ports::AuthNRoleRepository;
use authn_service::domain::authn_user::errors::AuthNUserError;
use authn_service::domain::authn_user::models::EmailAddress;
use authn_service::domain::authn_user::models::NewAuthNUser;
use authn_service::domain::authn_user::models::Username;
use authn_service::domain::authn_user::ports::AuthNUserRepository;
use authn_service::domain::client::errors::ClientError;
use authn_service::domain::client::models::Client;
use authn_service::domain::client::models::ClientDomain;
use authn_service::domain::client::models::ClientId;
use authn_service::domain::client::ports::ClientRepository;
use authn_service::domain::errors::HashingError;
use authn_service::outbound::repositories::PostgresAuthNRoleRepository;
use authn_service::outbound::repositories::PostgresAuthNUserRepository;
use authn_service::outbound::repositories::PostgresClientRepository;
use common::test_hasher;
use common::CountingHasher;
use common::TestDb;

fn staff_role() -> AuthNRole {
    AuthNRole::new(RoleName::new("staff".to_string()).expect("Invalid role name"))
}

fn suki(role: AuthNRole) -> NewAuthNUser {
    NewAuthNUser::new(
        Username::new("suki".to_string()).expect("Invalid username"),
        EmailAddress::new("pink2000@honda.com".to_string()).expect("Invalid email"),
        role,
    )
}

#[tokio::test]
async fn test_client_create_then_get() {
    let test_database = TestDb::new().await;
    let client_repository = PostgresClientRepository::new(test_database.pool.clone());

    let client = Client::new(ClientDomain::new("honda.com".to_string()).unwrap());

    let created = client_repository
        .create(client.clone())
        .await
        .expect("Failed to create client");
    assert_eq!(created, client);

    let retrieved = client_repository
        .get(&client.id)
        .await
        .expect("Failed to get client");
    assert_eq!(retrieved, client);
}

#[tokio::test]
async fn test_client_create_duplicate() {
    let test_database = TestDb::new().await;
    let client_repository = PostgresClientRepository::new(test_database.pool.clone());

    let client = Client::new(ClientDomain::new("honda.com".to_string()).unwrap());
    client_repository
        .create(client.clone())
        .await
        .expect("Failed to create client");

    let result = client_repository.create(client.clone()).await;
    assert!(matches!(result, Err(ClientError::DuplicateClient(id)) if id == client.id));
}

#[tokio::test]
async fn test_client_get_nonexistent() {
    let test_database = TestDb::new().await;
    let client_repository = PostgresClientRepository::new(test_database.pool.clone());

    let result = client_repository.get(&ClientId::new()).await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}

#[tokio::test]
async fn test_role_create_get_and_duplicate() {
    let test_database = TestDb::new().await;
    let role_repository = PostgresAuthNRoleRepository::new(test_database.pool.clone());

    let role = staff_role();

    let created = role_repository
        .create(role.clone())
        .await
        .expect("Failed to create role");
    assert_eq!(created, role);

    // Same name, fresh id
    let result = role_repository.create(staff_role()).await;
    assert!(matches!(result, Err(AuthNRoleError::DuplicateAuthNRole(name)) if name == "staff"));

    let retrieved = role_repository
        .get(&role.role)
        .await
        .expect("Failed to get role");
    assert_eq!(retrieved, role);
}

#[tokio::test]
async fn test_role_get_nonexistent() {
    let test_database = TestDb::new().await;
    let role_repository = PostgresAuthNRoleRepository::new(test_database.pool.clone());

    let result = role_repository
        .get(&RoleName::new("xxx".to_string()).unwrap())
        .await;
    assert!(matches!(result, Err(AuthNRoleError::AuthNRoleNotFound(_))));
}

#[tokio::test]
async fn test_user_create_get_and_duplicate() {
    let test_database = TestDb::new().await;
    let role_repository = PostgresAuthNRoleRepository::new(test_database.pool.clone());
    let user_repository =
        PostgresAuthNUserRepository::new(test_database.pool.clone(), test_hasher());

    let role = role_repository
        .create(staff_role())
        .await
        .expect("Failed to create role");
    let new_user = suki(role.clone());

    let created = user_repository
        .create(new_user.clone(), "suki_pass")
        .await
        .expect("Failed to create user");
    assert_eq!(created.id, new_user.id);
    assert_eq!(created.username, new_user.username);
    assert_eq!(created.email, new_user.email);
    assert_eq!(created.role, role);
    assert_ne!(created.password_hash, "suki_pass");

    let result = user_repository.create(suki(role.clone()), "suki_pass").await;
    assert!(matches!(
        result,
        Err(AuthNUserError::DuplicateAuthNUserForUsername { username }) if username == "suki"
    ));

    let retrieved = user_repository
        .get(&new_user.username)
        .await
        .expect("Failed to get user");
    assert_eq!(retrieved, created);
    assert_ne!(retrieved.password_hash, "suki_pass");
}

#[tokio::test]
async fn test_user_get_nonexistent() {
    let test_database = TestDb::new().await;
    let user_repository =
        PostgresAuthNUserRepository::new(test_database.pool.clone(), test_hasher());

    let result = user_repository
        .get(&Username::new("xxx".to_string()).unwrap())
        .await;
    assert!(matches!(
        result,
        Err(AuthNUserError::AuthNUserNotFoundForUsername { username }) if username == "xxx"
    ));
}

#[tokio::test]
async fn test_user_verify() {
    let test_database = TestDb::new().await;
    let role_repository = PostgresAuthNRoleRepository::new(test_database.pool.clone());
    let user_repository =
        PostgresAuthNUserRepository::new(test_database.pool.clone(), test_hasher());

    let role = role_repository
        .create(staff_role())
        .await
        .expect("Failed to create role");
    let user = user_repository
        .create(suki(role), "suki_pass")
        .await
        .expect("Failed to create user");

    let verified = user_repository
        .verify(&user.username, "suki_pass")
        .await
        .expect("Failed to verify password");
    assert!(verified, "correct password was not verified");

    let verified = user_repository
        .verify(&user.username, "Suki_pass")
        .await
        .expect("Failed to verify password");
    assert!(!verified, "incorrect password was verified");

    let result = user_repository
        .verify(&Username::new("xxx".to_string()).unwrap(), "suki_pass")
        .await;
    assert!(matches!(
        result,
        Err(AuthNUserError::AuthNUserNotFoundForUsername { .. })
    ));
}

#[tokio::test]
async fn test_user_verify_malformed_stored_hash() {
    let test_database = TestDb::new().await;
    let role_repository = PostgresAuthNRoleRepository::new(test_database.pool.clone());
    let user_repository =
        PostgresAuthNUserRepository::new(test_database.pool.clone(), test_hasher());

    let role = role_repository
        .create(staff_role())
        .await
        .expect("Failed to create role");
    let user = user_repository
        .create(suki(role), "suki_pass")
        .await
        .expect("Failed to create user");

    sqlx::query("UPDATE authentication_user SET password = 'not-a-phc-string' WHERE id = $1")
        .bind(user.id.0)
        .execute(&test_database.pool)
        .await
        .expect("Failed to corrupt hash");

    let result = user_repository.verify(&user.username, "suki_pass").await;
    assert!(matches!(
        result,
        Err(AuthNUserError::Hashing(HashingError::MalformedHash(_)))
    ));
}

#[tokio::test]
async fn test_user_create_with_unknown_role() {
    let test_database = TestDb::new().await;
    let user_repository =
        PostgresAuthNUserRepository::new(test_database.pool.clone(), test_hasher());

    // Role never persisted: rejected by the foreign key
    let result = user_repository.create(suki(staff_role()), "suki_pass").await;
    assert!(matches!(result, Err(AuthNUserError::DatabaseError(_))));
}

#[tokio::test]
async fn test_user_create_hashing_failure_writes_nothing() {
    let test_database = TestDb::new().await;
    let role_repository = PostgresAuthNRoleRepository::new(test_database.pool.clone());
    let user_repository = PostgresAuthNUserRepository::new(
        test_database.pool.clone(),
        Arc::new(CountingHasher::failing()),
    );

    let role = role_repository
        .create(staff_role())
        .await
        .expect("Failed to create role");
    let new_user = suki(role);

    let result = user_repository.create(new_user.clone(), "suki_pass").await;
    assert!(matches!(
        result,
        Err(AuthNUserError::Hashing(HashingError::HashingFailed(_)))
    ));

    let result = user_repository.get(&new_user.username).await;
    assert!(matches!(
        result,
        Err(AuthNUserError::AuthNUserNotFoundForUsername { username }) if username == "suki"
    ));
}

#[tokio::test]
async fn test_user_verify_unknown_username_still_hashes() {
    let test_database = TestDb::new().await;
    let hasher = Arc::new(CountingHasher::default());
    let user_repository =
        PostgresAuthNUserRepository::new(test_database.pool.clone(), Arc::clone(&hasher));

    let result = user_repository
        .verify(&Username::new("xxx".to_string()).unwrap(), "suki_pass")
        .await;
    assert!(matches!(
        result,
        Err(AuthNUserError::AuthNUserNotFoundForUsername { username }) if username == "xxx"
    ));
    assert_eq!(hasher.hash_calls(), 1);
}
