//! Terminal walkthrough of the portal core
//!
//! Binds the UI-agnostic core to plain stdout: render callbacks print
//! tables, the notifier prints toast lines. Runs the whole demo flow
//! against a throwaway data directory.

use portal_core::{
    AuthManager, Notifier, PortalPaths, PortalStorage, Route, Router, Store, logger,
};
use shared::models::{DepartmentCreate, EmployeeUpsert, RegisterPayload, RequestCreate, RequestItem};

fn main() -> anyhow::Result<()> {
    logger::init_logger_with_level(Some("debug"));

    let dir = std::env::temp_dir().join("portal-walkthrough");
    let paths = PortalPaths::new(&dir);
    paths.ensure_dirs()?;

    let storage = PortalStorage::open(paths.db_file())?;
    let mut store = Store::load(storage.clone())?;
    let mut auth = AuthManager::new(storage);

    let mut router = Router::with_notifier(Notifier::with_sink(|notice| {
        println!("[{:?}] {}", notice.level, notice.message);
    }));
    router.on_render(Route::Home, || println!("-- home --"));
    router.on_render(Route::Login, || println!("-- login form --"));

    // Fresh page load: restore whatever session the last run left behind
    auth.restore(&store)?;
    router.navigate("#/", auth.session());

    // A visitor cannot reach the profile
    router.navigate("#/profile", auth.session());

    // Register, verify, login
    if store.find_account("bob@x.com").is_none() {
        auth.register(
            &mut store,
            RegisterPayload {
                first_name: "Bob".to_string(),
                last_name: "Jones".to_string(),
                email: "bob@x.com".to_string(),
                password: "hunter22".to_string(),
            },
        )?;
        auth.simulate_verify(&mut store)?;
    }
    auth.login(&store, "bob@x.com", "hunter22")?;

    // Bob submits a request, then bounces off the admin views
    store.submit_request(
        RequestCreate {
            kind: "Equipment".to_string(),
            items: vec![RequestItem {
                name: "Laptop".to_string(),
                qty: "1".to_string(),
            }],
        },
        "bob@x.com",
    )?;
    store.save()?;
    router.navigate("#/employees", auth.session());

    // The admin does the administration
    auth.login(&store, "admin@example.com", "Password123!")?;
    if !store.list_departments().iter().any(|d| d.name == "Finance") {
        store.create_department(DepartmentCreate {
            name: "Finance".to_string(),
            description: "Numbers team".to_string(),
        })?;
    }
    store.upsert_employee(EmployeeUpsert {
        id: "E-1".to_string(),
        email: "bob@x.com".to_string(),
        position: "Engineer".to_string(),
        dept: "Engineering".to_string(),
        hire_date: "2026-08-01".to_string(),
    })?;
    store.save()?;

    router.on_render(Route::Employees, || println!("-- employees table --"));
    router.navigate("#/employees", auth.session());

    println!("accounts: {}", store.list_accounts().len());
    println!("employees: {}", store.list_employees().len());
    println!("requests by bob: {}", store.requests_for("bob@x.com").len());

    auth.logout()?;
    router.navigate("#/", auth.session());
    Ok(())
}
