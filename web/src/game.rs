use crate::net::HttpSource;
use crate::utils::*;
use clap::Args;
use cluegrid_core as game;
use cluegrid_protocol::Endpoint;
use game::BoardGenerator;
use yew::prelude::*;

/// Game state as seen by the view: the current board plus the progress of the
/// next one.
///
/// While a new board loads, the old one stays owned here but is neither shown
/// nor revealed; it is only dropped once its replacement is complete.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GameSession {
    board: Option<game::Board>,
    loading: bool,
    error: Option<game::GameError>,
}

impl GameSession {
    fn is_loading(&self) -> bool {
        self.loading
    }

    fn board(&self) -> Option<&game::Board> {
        self.board.as_ref()
    }

    fn error(&self) -> Option<&game::GameError> {
        self.error.as_ref()
    }

    fn is_cleared(&self) -> bool {
        !self.loading && self.board.as_ref().is_some_and(game::Board::is_complete)
    }

    /// Returns `false` when a board is already on its way.
    fn begin_loading(&mut self) -> bool {
        if self.loading {
            log::debug!("new game ignored, board still loading");
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    fn finish_loading(&mut self, result: game::Result<game::Board>) {
        self.loading = false;
        match result {
            Ok(board) => {
                self.board = Some(board);
            }
            Err(err) => {
                log::warn!("new game failed: {}", err);
                self.error = Some(err);
            }
        }
    }

    fn reveal(&mut self, cell: game::CellId) -> bool {
        if self.loading {
            return false;
        }
        let Some(board) = self.board.as_mut() else {
            return false;
        };

        match board.reveal(cell) {
            Ok(outcome) => {
                log::debug!("cell {}: {:?} {:?}", cell, outcome.style(), outcome.text());
                outcome.has_update()
            }
            Err(err) => {
                log::error!("cell {}: {}", cell, err);
                false
            }
        }
    }

    fn cell_display(&self, cell: game::CellId) -> Option<(String, game::StyleHint)> {
        self.board.as_ref()?.clue_at(cell).ok()?.display()
    }
}

pub(crate) enum Msg {
    NewGame,
    BoardLoaded(game::Result<game::Board>),
    Reveal(game::CellId),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: game::CellId,
    display: Option<(String, game::StyleHint)>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use game::StyleHint::*;

    let CellProps { cell, display } = props.clone();

    let (class, text) = match display {
        None => (classes!("cell", "hidden"), "?".to_string()),
        Some((text, Default)) => (classes!("cell", "shown"), text),
        Some((text, Emphasized)) => (classes!("cell", "shown", "emphasized"), text),
    };

    html! {
        <td {class} data-cell={cell.to_string()}>{text}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Base URL of the trivia catalog API
    #[arg(long, default_value = cluegrid_protocol::DEFAULT_API_BASE)]
    pub(crate) api: String,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    source: HttpSource,
    config: game::BoardConfig,
}

impl GameView {
    fn start_game(&mut self, ctx: &Context<Self>) -> bool {
        if !self.session.begin_loading() {
            return false;
        }

        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let source = self.source.clone();
        let config = self.config;
        log::info!("new game, seed: {}", seed);

        ctx.link().send_future(async move {
            let result = game::RandomBoardGenerator::new(seed)
                .generate(&source, config)
                .await;
            Msg::BoardLoaded(result)
        });
        true
    }

    fn button_label(&self) -> &'static str {
        if self.session.is_loading() {
            "Loading..."
        } else if self.session.board().is_some() {
            "Restart"
        } else {
            "Start"
        }
    }

    fn view_board(&self, ctx: &Context<Self>, board: &game::Board) -> Html {
        // one listener for the whole grid, cells are told apart by `data-cell`
        let onclick = ctx.link().batch_callback(|e: MouseEvent| {
            let target = e.target_dyn_into::<web_sys::Element>()?;
            let td = target.closest("td[data-cell]").ok().flatten()?;
            let text = td.get_attribute("data-cell")?;
            match text.parse::<game::CellId>() {
                Ok(cell) => Some(Msg::Reveal(cell)),
                Err(err) => {
                    log::error!("cell id {:?}: {}", text, err);
                    None
                }
            }
        });

        html! {
            <table {onclick}>
                <thead>
                    <tr>
                        {
                            for board.categories().iter().map(|category| html! {
                                <th>{category.title().to_string()}</th>
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..game::CLUES_PER_CATEGORY).map(|clue| html! {
                            <tr>
                                {
                                    for (0..board.categories().len())
                                        .filter_map(|category| {
                                            board.cell(category as game::Index, clue as game::Index).ok()
                                        })
                                        .map(|cell| {
                                            let display = self.session.cell_display(cell);
                                            html! { <CellView {cell} {display}/> }
                                        })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let endpoint = Endpoint::new(ctx.props().api.clone());
        let mut view = Self {
            session: GameSession::default(),
            source: HttpSource::new(endpoint),
            config: game::BoardConfig::default(),
        };
        view.start_game(ctx);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NewGame => self.start_game(ctx),
            BoardLoaded(result) => {
                self.session.finish_loading(result);
                true
            }
            Reveal(cell) => self.session.reveal(cell),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.session.is_loading();
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        html! {
            <div class="cluegrid">
                <nav>
                    <button onclick={cb_new_game} disabled={loading}>{self.button_label()}</button>
                </nav>
                if let Some(err) = self.session.error() {
                    <p class="error">{format!("{}. Start a new game to try again.", err)}</p>
                }
                if self.session.is_cleared() {
                    <p class="cleared">{"Board cleared! Start a new game for more clues."}</p>
                }
                if loading {
                    <div class="spinner"/>
                } else if let Some(board) = self.session.board() {
                    {self.view_board(ctx, board)}
                }
            </div>
        }
    }
}
