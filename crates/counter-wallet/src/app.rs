//! Main application state and update loop

use eframe::egui;

use counter_wallet_core::WalletHandle;

use crate::bridge::{ConnectOutcome, WalletBridge};
use crate::state::{increment_enabled, ResultView, Screen, ShellState};
use crate::ui;

/// The main application state
pub struct App {
    bridge: WalletBridge,
    shell: ShellState,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, bridge: WalletBridge) -> Self {
        tracing::info!(mode = bridge.wallet_mode(), "wallet adapter ready");
        Self {
            bridge,
            shell: ShellState::default(),
        }
    }

    fn apply_connect_outcome(&mut self, outcome: ConnectOutcome) {
        match outcome {
            ConnectOutcome::Connected(handle) => {
                self.shell
                    .set_info(format!("Connected {}", ui::short_address(&handle.address)));
            }
            ConnectOutcome::Failed(message) => self.shell.set_connect_error(message),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        if let Some(outcome) = self.bridge.poll() {
            self.apply_connect_outcome(outcome);
        }
        let session = self.bridge.session();
        self.shell.screen = Screen::for_session(session.as_ref());

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui::styled_heading(ui, "Counter Wallet");
                if let Some(handle) = &session {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(ui::short_address(&handle.address)).monospace());
                    });
                }
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "build {} · {}",
                    env!("GIT_HASH"),
                    env!("BUILD_TIME")
                ))
                .weak()
                .small(),
            );
        });

        let failure_open = matches!(
            ResultView::from_state(self.bridge.submission()),
            ResultView::FailureModal { .. }
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!failure_open, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(16.0);
                    match (self.shell.screen, session.as_ref()) {
                        (Screen::Wallet, Some(handle)) => self.render_wallet_screen(ui, ctx, handle),
                        _ => self.render_connect_screen(ui, ctx),
                    }
                    ui.add_space(20.0);
                });
            });
        });

        self.render_failure_window(ctx);
    }
}

impl App {
    fn render_connect_screen(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            ui.heading("Connect your wallet");
            ui.label("Signing and key management stay with your wallet provider.");
        });
        ui.add_space(20.0);

        let connecting = self.bridge.is_connecting();
        if ui::primary_button_enabled(ui, "Connect wallet", !connecting).clicked() {
            self.shell.clear_notice();
            self.bridge.trigger_connect(ctx);
        }

        if connecting {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Waiting for wallet…");
            });
        }

        if let Some(error) = &self.shell.connect_error {
            ui.add_space(10.0);
            ui::error_message(ui, error);
        }
    }

    fn render_wallet_screen(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        handle: &WalletHandle,
    ) {
        let chain_name = self.bridge.submitter_config().chain_name.clone();
        let counter = self.bridge.submitter_config().counter_address;

        ui::card(ui, |ui| {
            egui::Grid::new("wallet_details")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Account").strong());
                    let address = handle.address.to_checksum(None);
                    if ui
                        .link(egui::RichText::new(ui::short_address(&handle.address)).monospace())
                        .on_hover_text(address.as_str())
                        .clicked()
                    {
                        ui::open_url_new_tab(&ui::get_explorer_address_url(&chain_name, &address));
                    }
                    ui.end_row();

                    ui.label(egui::RichText::new("Chain").strong());
                    ui.label(format!("{} ({})", chain_name, handle.chain_id));
                    ui.end_row();

                    ui.label(egui::RichText::new("Counter").strong());
                    ui.label(egui::RichText::new(ui::short_address(&counter)).monospace());
                    ui.end_row();

                    ui.label(egui::RichText::new("Wallet").strong());
                    ui.label(self.bridge.wallet_mode());
                    ui.end_row();
                });
        });

        if let Some(info) = &self.shell.last_info {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(info).weak());
        }

        ui.add_space(16.0);

        let mut dismiss = false;
        if let ResultView::Success { hash, explorer_url } =
            ResultView::from_state(self.bridge.submission())
        {
            ui::card(ui, |ui| {
                ui::success_message(ui, "Increment successful!");
                ui::copyable_hash(ui, hash);
                ui.horizontal(|ui| {
                    if ui.link("View on explorer").on_hover_text(explorer_url).clicked() {
                        ui::open_url_new_tab(explorer_url);
                    }
                    ui.add_space(12.0);
                    if ui::secondary_button(ui, "Dismiss").clicked() {
                        dismiss = true;
                    }
                });
            });
            ui.add_space(16.0);
        }
        if dismiss {
            self.bridge.dismiss();
        }

        let enabled = increment_enabled(self.bridge.submission());
        if ui::primary_button_enabled(ui, "Increment", enabled).clicked() {
            self.bridge.trigger_submit(ctx);
        }
        if !enabled {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Waiting for the wallet to submit…");
            });
        }

        ui.add_space(24.0);
        let disconnect = ui
            .add_enabled_ui(enabled, |ui| ui::secondary_button(ui, "Disconnect"))
            .inner;
        if disconnect.clicked() && self.bridge.disconnect() {
            self.shell.clear_notice();
        }
    }

    fn render_failure_window(&mut self, ctx: &egui::Context) {
        let mut dismiss = false;
        if let ResultView::FailureModal { message } = ResultView::from_state(self.bridge.submission())
        {
            egui::Window::new("Transaction failed")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui::error_message(ui, message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismiss = true;
                    }
                });
        }
        if dismiss {
            self.bridge.dismiss();
        }
    }
}
