use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::prelude::*;
use futures::channel::oneshot;

use farmacia_panel::farmacia_client::{ClientError, FarmaciaApi};
use farmacia_panel::pages::Dashboard;
use farmacia_panel::session::{InMemorySessionStore, SessionProvider};
use farmacia_panel::types::{Laboratorio, Medicamento, OrdenCompra, Role, Session};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/login")]
    Login {},
}

thread_local! {
    static LOGIN_MOUNTS: Cell<usize> = const { Cell::new(0) };
}

#[component]
fn Login() -> Element {
    use_hook(|| LOGIN_MOUNTS.with(|mounts| mounts.set(mounts.get() + 1)));
    rsx! {
        div { class: "login-page", "Iniciar sesión" }
    }
}

#[component]
fn TestApp() -> Element {
    rsx! { Router::<Route> {} }
}

/// `None` makes the corresponding list call fail.
struct StubFarmacia {
    counts: [Option<usize>; 3],
    calls: Rc<Cell<usize>>,
    medicamentos_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl StubFarmacia {
    fn new(counts: [Option<usize>; 3]) -> Self {
        Self {
            counts,
            calls: Rc::new(Cell::new(0)),
            medicamentos_gate: RefCell::new(None),
        }
    }

    fn respond<T: Default + Clone>(&self, len: Option<usize>) -> Result<Vec<T>, ClientError> {
        self.calls.set(self.calls.get() + 1);
        match len {
            Some(n) => Ok(vec![T::default(); n]),
            None => Err(ClientError::Api {
                status: 503,
                body: "Service Unavailable".to_string(),
            }),
        }
    }
}

#[async_trait(?Send)]
impl FarmaciaApi for StubFarmacia {
    async fn list_medicamentos(&self) -> Result<Vec<Medicamento>, ClientError> {
        let gate = self.medicamentos_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.respond(self.counts[0])
    }

    async fn list_laboratorios(&self) -> Result<Vec<Laboratorio>, ClientError> {
        self.respond(self.counts[1])
    }

    async fn list_ordenes_compra(&self) -> Result<Vec<OrdenCompra>, ClientError> {
        self.respond(self.counts[2])
    }
}

fn mount(session: Option<Session>, api: StubFarmacia) -> VirtualDom {
    let sessions: Rc<dyn SessionProvider> = Rc::new(InMemorySessionStore::new(session));
    let api: Rc<dyn FarmaciaApi> = Rc::new(api);
    let mut dom = VirtualDom::new(TestApp)
        .with_root_context(sessions)
        .with_root_context(api);
    dom.rebuild_in_place();
    dom
}

/// Drive effects, tasks and re-renders until nothing is left to do.
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..16 {
        let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }
}

fn between<'a>(html: &'a str, marker: &str) -> Vec<&'a str> {
    html.split(marker)
        .skip(1)
        .filter_map(|rest| rest.split('<').next())
        .collect()
}

fn link_titles(html: &str) -> Vec<&str> {
    between(html, "class=\"link-title\">")
}

#[tokio::test]
async fn admin_sees_every_quick_link() {
    let session = Session::new("jefa", [Role::User, Role::Admin]);
    let mut dom = mount(Some(session), StubFarmacia::new([Some(3), Some(5), Some(0)]));
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Panel de Control"));
    assert!(html.contains("<strong>jefa</strong>"));
    assert_eq!(between(&html, "class=\"stat-value\">"), ["3", "5", "0"]);
    assert_eq!(
        link_titles(&html),
        ["Medicamentos", "Laboratorios", "Órdenes de Compra", "Usuarios"]
    );
    for href in [
        "/medicamentos",
        "/medicamentos/nuevo",
        "/laboratorios",
        "/laboratorios/nuevo",
        "/ordenes-compra",
        "/ordenes-compra/nueva",
        "/usuarios",
        "/usuarios/nuevo",
    ] {
        assert!(html.contains(&format!("href=\"{href}\"")), "missing {href}");
    }
    assert!(!html.contains("cargando"));
}

#[tokio::test]
async fn regular_user_gets_no_admin_links() {
    let session = Session::new("empleado", [Role::User]);
    let mut dom = mount(Some(session), StubFarmacia::new([Some(1), Some(1), Some(1)]));
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);

    assert_eq!(link_titles(&html), ["Medicamentos", "Órdenes de Compra"]);
    assert!(html.contains("href=\"/medicamentos\""));
    assert!(html.contains("href=\"/ordenes-compra/nueva\""));
    assert!(!html.contains("href=\"/medicamentos/nuevo\""));
    assert!(!html.contains("href=\"/laboratorios"));
    assert!(!html.contains("href=\"/usuarios"));
}

#[tokio::test]
async fn shows_only_loading_until_every_fetch_settles() {
    let api = StubFarmacia::new([Some(2), Some(4), Some(6)]);
    let (release, gate) = oneshot::channel();
    *api.medicamentos_gate.borrow_mut() = Some(gate);

    let session = Session::new("ana", [Role::Admin]);
    let mut dom = mount(Some(session), api);
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("class=\"cargando\""));
    assert!(!html.contains("stat-item"));
    assert!(!html.contains("link-item"));
    assert!(!html.contains("Bienvenido"));

    release.send(()).unwrap();
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);

    assert!(!html.contains("cargando"));
    assert_eq!(between(&html, "class=\"stat-value\">"), ["2", "4", "6"]);
}

#[tokio::test]
async fn failed_fetch_shows_zero_on_its_own_tile() {
    let session = Session::new("ana", [Role::User]);
    let mut dom = mount(Some(session), StubFarmacia::new([None, Some(2), Some(4)]));
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);

    assert_eq!(between(&html, "class=\"stat-value\">"), ["0", "2", "4"]);
}

#[tokio::test]
async fn signed_out_visitor_is_sent_to_login_once() {
    LOGIN_MOUNTS.with(|mounts| mounts.set(0));
    let api = StubFarmacia::new([Some(1), Some(1), Some(1)]);
    let calls = api.calls.clone();

    let mut dom = mount(None, api);
    let first = dioxus_ssr::render(&dom);
    assert!(!first.contains("cargando"));
    assert!(!first.contains("dashboard-container"));
    assert!(!first.contains("login-page"));

    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);

    assert_eq!(LOGIN_MOUNTS.with(Cell::get), 1);
    assert!(html.contains("login-page"));
    assert!(!html.contains("cargando"));
    assert!(!html.contains("stat-item"));
    assert_eq!(calls.get(), 0, "no collection is fetched without a session");
}
