use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use quiz_core::{Difficulty, QuestionRecord, QuizSession};
use services::{
    AppServices, HighScoreService, QuestionService, QuestionSource, SourceError,
    fallback_questions,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, QuizView, ResultsView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn question_count(&self) -> u32 {
        self.services.question_count()
    }

    fn initial_high_score(&self) -> u32 {
        self.services.initial_high_score()
    }

    fn question_service(&self) -> Arc<QuestionService> {
        self.services.question_service()
    }

    fn high_scores(&self) -> Arc<HighScoreService> {
        self.services.high_scores()
    }
}

/// Always answers with a fixed question set.
pub struct StaticSource(pub Vec<QuestionRecord>);

#[async_trait]
impl QuestionSource for StaticSource {
    async fn fetch(
        &self,
        _count: u32,
        _difficulty: Difficulty,
    ) -> Result<Vec<QuestionRecord>, SourceError> {
        Ok(self.0.clone())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: QuizSession,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let session = props.session.clone();
    use_context_provider(move || Signal::new(session));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a view harness around a pre-seeded session state.
pub async fn setup_view_harness(view: ViewKind, session: QuizSession) -> ViewHarness {
    let services = AppServices::new_in_memory(Arc::new(StaticSource(fallback_questions())), 10)
        .await
        .expect("assemble services");
    let app = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, session });

    ViewHarness { dom }
}
