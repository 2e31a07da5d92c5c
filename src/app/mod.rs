use anyhow::Result;
use eframe::egui::{Align2, Color32, RichText, TextEdit, Widget};
use eframe::{egui, Frame, Storage};

use config::Config;
use simulation::{Adjustment, Inputs, Phase, Simulation};

mod config;
mod report;
mod simulation;

pub struct App {
    cfg: Config,
    sim: Option<Simulation>,
    report: String,
    adjust_rate: String,
    adjust_deposit: String,
    warn: Result<()>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            cfg: Config::default(),
            sim: None,
            report: String::new(),
            adjust_rate: String::new(),
            adjust_deposit: String::new(),
            warn: Ok(()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if let Err(e) = &self.warn {
            egui::TopBottomPanel::top("warn").show(ctx, |ui| {
                let warn = RichText::from(e.to_string()).color(Color32::RED);
                ui.label(warn);
            });
        }

        egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
            egui::widgets::global_theme_preference_switch(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                TextEdit::singleline(&mut self.cfg.deposit)
                    .hint_text("Initial Deposit ($)")
                    .desired_width(110.0)
                    .ui(ui);
                TextEdit::singleline(&mut self.cfg.rate)
                    .hint_text("Annual Interest Rate (%)")
                    .desired_width(150.0)
                    .ui(ui);
                TextEdit::singleline(&mut self.cfg.years)
                    .hint_text("Number of Years")
                    .desired_width(110.0)
                    .ui(ui);
                if ui.button("Calculate").clicked() {
                    self.start_run();
                }
            });

            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.label(RichText::new(&self.report).monospace());
                });
        });

        self.drive(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.cfg);
    }
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.storage
            .and_then(|storage| eframe::get_value::<Config>(storage, eframe::APP_KEY))
            .map(|cfg| Self {
                cfg,
                ..Default::default()
            })
            .unwrap_or_default()
    }

    fn start_run(&mut self) {
        match Inputs::parse(&self.cfg.deposit, &self.cfg.rate, &self.cfg.years) {
            Ok(inputs) => {
                self.sim = Some(Simulation::new(inputs));
                self.report.clear();
                self.adjust_rate.clear();
                self.adjust_deposit.clear();
                self.warn = Ok(());
            }
            Err(e) => self.warn = Err(e.into()),
        }
    }

    /// One stepper tick per frame, so the report streams in a year at a time
    /// while the window stays responsive.
    fn drive(&mut self, ctx: &egui::Context) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        match sim.phase() {
            Phase::Compounding { .. } => {
                if let Some(year) = sim.advance_year() {
                    self.report
                        .push_str(&report::year_fragment(year, sim.year_entries(year)));
                    self.report.push('\n');
                    if sim.phase() == Phase::Completed {
                        self.report
                            .push_str(&report::final_summary(sim.original_deposit(), sim.balance()));
                    }
                }
                ctx.request_repaint();
            }
            Phase::AwaitingAdjustment { year } => self.adjustment_window(ctx, year),
            Phase::Completed => {}
        }
    }

    fn adjustment_window(&mut self, ctx: &egui::Context, year: u32) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        egui::Window::new(format!("Year {year} Adjustments"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                TextEdit::singleline(&mut self.adjust_rate)
                    .hint_text(format!("New Rate (current: {}%)", sim.annual_rate()))
                    .ui(ui);
                TextEdit::singleline(&mut self.adjust_deposit)
                    .hint_text("Additional Deposit ($)")
                    .ui(ui);
                if ui.button("Continue").clicked() {
                    match Adjustment::parse(&self.adjust_rate, &self.adjust_deposit) {
                        Ok(adjustment) => {
                            sim.apply_adjustment(adjustment);
                            self.adjust_rate.clear();
                            self.adjust_deposit.clear();
                            self.warn = Ok(());
                            ctx.request_repaint();
                        }
                        Err(e) => self.warn = Err(e.into()),
                    }
                }
            });
    }
}
