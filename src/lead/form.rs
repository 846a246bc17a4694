use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::config;
use crate::lead::api;
use crate::lead::model::{narrative_for, FleetSize, Narrative, PainPoint, RiskData, Role};
use crate::lead::wizard::{FieldEdit, Stage, Wizard};

// Perceived-latency delay before the lookup request goes out. Deliberate.
const ANALYZING_DELAY_MS: u32 = 1_500;

fn render_scorecard(risk: &RiskData) -> Html {
    let rating = risk.safety_rating.clone().unwrap_or_else(|| "None".to_string());
    html! {
        <div class="scorecard">
            <div class="scorecard-tile">
                <span class="tile-value">{rating}</span>
                <span class="tile-label">{"Safety Rating"}</span>
            </div>
            <div class="scorecard-tile">
                <span class="tile-value">{risk.total_crashes}</span>
                <span class="tile-label">{"Reportable Crashes"}</span>
            </div>
            <div class="scorecard-tile">
                <span class="tile-value">{format!("{}%", risk.driver_oos_rate)}</span>
                <span class="tile-label">{"Driver OOS Rate"}</span>
            </div>
        </div>
    }
}

fn render_narrative(risk: &RiskData) -> Html {
    match narrative_for(risk.risk_level) {
        Narrative::ElevatedRisk => {
            let level = risk.risk_level.map(|l| l.as_str()).unwrap_or("HIGH");
            html! {
                <div class="narrative elevated">
                    <div class="narrative-headline">{format!("⚠ {} RISK DETECTED", level)}</div>
                    <p class="narrative-copy">
                        {"Your public safety record is flagging you for an audit. \
                          Insurers and brokers see the same numbers."}
                    </p>
                </div>
            }
        }
        Narrative::HiddenLeakage => html! {
            <div class="narrative leakage">
                <div class="narrative-headline">{"✓ LOW AUDIT RISK — BUT MONEY IS LEAKING"}</div>
                <p class="narrative-copy">
                    {"Your compliance numbers look clean. Clean fleets are exactly where \
                      hidden fuel and downtime leakage hides the longest."}
                </p>
            </div>
        },
    }
}

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let wizard = use_state(Wizard::new);
    let show_scheduler = use_state(|| false);
    let utm_source = use_search_param("utm_source".to_string());
    let utm_campaign = use_search_param("utm_campaign".to_string());

    // Provenance capture on mount: traffic source, campaign tag, page path.
    {
        let wizard = wizard.clone();
        use_effect_with_deps(
            move |(source, campaign): &(Option<String>, Option<String>)| {
                let path = window()
                    .and_then(|w| w.location().pathname().ok())
                    .unwrap_or_else(|| "/".to_string());
                let mut next = (*wizard).clone();
                next.set_provenance(source.clone(), campaign.clone(), path);
                wizard.set(next);
                || ()
            },
            (utm_source.clone(), utm_campaign.clone()),
        );
    }

    let edit = {
        let wizard = wizard.clone();
        Callback::from(move |field_edit: FieldEdit| {
            let mut next = (*wizard).clone();
            next.apply_edit(field_edit);
            wizard.set(next);
        })
    };

    let on_text_input = |make: fn(String) -> FieldEdit| {
        let edit = edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit.emit(make(input.value()));
        })
    };

    let on_lookup_submit = {
        let wizard = wizard.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            if !next.begin_lookup() {
                wizard.set(next);
                return;
            }
            let dot = next.record.dot_number.clone();
            wizard.set(next.clone());
            let wizard = wizard.clone();
            spawn_local(async move {
                TimeoutFuture::new(ANALYZING_DELAY_MS).await;
                let result = api::fetch_risk_preview(&dot).await;
                let mut after = next;
                after.lookup_resolved(result);
                wizard.set(after);
            });
        })
    };

    let on_contact_submit = {
        let wizard = wizard.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            next.advance_to_qualification();
            wizard.set(next);
        })
    };

    let on_final_submit = {
        let wizard = wizard.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            let payload = match next.begin_submit() {
                Some(payload) => payload,
                None => {
                    wizard.set(next);
                    return;
                }
            };
            wizard.set(next.clone());
            let wizard = wizard.clone();
            spawn_local(async move {
                let outcome = api::submit_lead(&payload).await;
                let mut after = next;
                after.submit_resolved(outcome);
                wizard.set(after);
            });
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            next.back_to_results();
            wizard.set(next);
        })
    };

    let on_waitlist_restart = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            next.restart_from_waitlist();
            wizard.set(next);
        })
    };

    let on_dismiss_alert = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            next.dismiss_alert();
            wizard.set(next);
        })
    };

    let on_dismiss_error = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            next.dismiss_form_error();
            wizard.set(next);
        })
    };

    // A restart is a fresh record, but the session still arrived however it
    // arrived: re-apply the captured provenance, which the mount effect will
    // not re-run for.
    let on_full_restart = {
        let wizard = wizard.clone();
        let show_scheduler = show_scheduler.clone();
        let utm_source = utm_source.clone();
        let utm_campaign = utm_campaign.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_scheduler.set(false);
            let path = window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_string());
            let mut fresh = Wizard::new();
            fresh.set_provenance(utm_source.clone(), utm_campaign.clone(), path);
            wizard.set(fresh);
        })
    };

    let toggle_scheduler = {
        let show_scheduler = show_scheduler.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_scheduler.set(!*show_scheduler);
        })
    };

    let record = &wizard.record;

    let stage_view = match wizard.stage {
        Stage::Input | Stage::Analyzing => {
            let analyzing = wizard.stage == Stage::Analyzing;
            html! {
                <div class="lead-card">
                    <div class="lead-card-header">
                        <span class="free-tool-badge">{"Free Tool"}</span>
                        <h3>{"Check Your DOT Risk Score"}</h3>
                        <p>{"Enter your DOT# to see if you are flagged for an audit."}</p>
                    </div>
                    {
                        if let Some(alert) = wizard.alert.as_ref() {
                            html! {
                                <div class="lead-alert">
                                    {alert.clone()}
                                    <button class="dismiss-button" onclick={on_dismiss_alert.clone()}>{"×"}</button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <form onsubmit={on_lookup_submit.clone()}>
                        <label class="field-label">{"US DOT Number"}</label>
                        <input
                            class="dot-input"
                            placeholder="e.g. 1234567"
                            value={record.dot_number.clone()}
                            disabled={analyzing}
                            oninput={on_text_input(FieldEdit::DotNumber)}
                            required=true
                        />
                        <button class="lead-cta" disabled={analyzing}>
                            {
                                if analyzing {
                                    html! { <><span class="spinner"></span>{" Analyzing FMCSA Database..."}</> }
                                } else {
                                    html! { {"Check My Risk Score"} }
                                }
                            }
                        </button>
                    </form>
                </div>
            }
        }
        Stage::Results => {
            let risk = wizard.risk.as_ref().expect("results stage always has risk data");
            html! {
                <div class="lead-card results">
                    { render_narrative(risk) }
                    { render_scorecard(risk) }
                    <div class="risk-detail">
                        <p>
                            <strong>{"Fleet: "}</strong>
                            {risk.company_name.clone().unwrap_or_default()}
                        </p>
                        <p>
                            <strong>{"Vehicle OOS: "}</strong>
                            <span class="oos-value">{format!("{}%", risk.vehicle_oos_rate)}</span>
                            <span class="oos-benchmark">{" (Natl Avg: 22%)"}</span>
                        </p>
                        <p class="flags-tease">
                            {format!("We found {} data points driving this score.", risk.risk_flags.len())}
                        </p>
                    </div>
                    <form onsubmit={on_contact_submit.clone()}>
                        <h4>{"Where should we send the Fix Report?"}</h4>
                        <input
                            placeholder="Your Name"
                            value={record.full_name.clone()}
                            oninput={on_text_input(FieldEdit::FullName)}
                            required=true
                        />
                        <input
                            type="email"
                            placeholder="Work Email (Required for Report)"
                            value={record.work_email.clone()}
                            oninput={on_text_input(FieldEdit::WorkEmail)}
                            required=true
                        />
                        <input
                            placeholder="Company Name"
                            value={record.company_name.clone()}
                            oninput={on_text_input(FieldEdit::CompanyName)}
                        />
                        <input
                            type="tel"
                            placeholder="Phone (optional)"
                            value={record.phone.clone()}
                            oninput={on_text_input(FieldEdit::Phone)}
                        />
                        <div class="select-row">
                            <select
                                onchange={{
                                    let edit = edit.clone();
                                    Callback::from(move |e: Event| {
                                        let select: HtmlSelectElement = e.target_unchecked_into();
                                        edit.emit(FieldEdit::FleetSize(FleetSize::from_value(&select.value())));
                                    })
                                }}
                                required=true
                            >
                                <option value="" selected={record.fleet_size.is_none()} disabled=true>{"Fleet Size"}</option>
                                {
                                    FleetSize::ALL.iter().map(|size| html! {
                                        <option value={size.value()} selected={record.fleet_size == Some(*size)}>
                                            {size.label()}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                            <select
                                onchange={{
                                    let edit = edit.clone();
                                    Callback::from(move |e: Event| {
                                        let select: HtmlSelectElement = e.target_unchecked_into();
                                        edit.emit(FieldEdit::Role(Role::from_value(&select.value())));
                                    })
                                }}
                                required=true
                            >
                                <option value="" selected={record.role.is_none()} disabled=true>{"Role"}</option>
                                {
                                    Role::ALL.iter().map(|role| html! {
                                        <option value={role.value()} selected={record.role == Some(*role)}>
                                            {role.value()}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </div>
                        {
                            if let Some(message) = wizard.form_error.as_ref() {
                                html! { <div class="inline-error">{message.clone()}</div> }
                            } else {
                                html! {}
                            }
                        }
                        <button class="lead-cta green">{"Continue →"}</button>
                    </form>
                </div>
            }
        }
        Stage::Qualification | Stage::Submitting => {
            let submitting = wizard.stage == Stage::Submitting;
            html! {
                <div class="lead-card">
                    <div class="lead-card-header">
                        <h3>{"Last step: tell us where it hurts"}</h3>
                        <p>{"This steers the audit toward your biggest leak first."}</p>
                    </div>
                    <form onsubmit={on_final_submit.clone()}>
                        <select
                            disabled={submitting}
                            onchange={{
                                let edit = edit.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    edit.emit(FieldEdit::PainPoint(PainPoint::from_value(&select.value())));
                                })
                            }}
                        >
                            <option value="" selected={record.pain_point.is_none()} disabled=true>{"Biggest pain point"}</option>
                            {
                                PainPoint::ALL.iter().map(|p| html! {
                                    <option value={p.value()} selected={record.pain_point == Some(*p)}>
                                        {p.value()}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                        <textarea
                            placeholder="Anything else we should know? (optional)"
                            value={record.pain_detail.clone()}
                            disabled={submitting}
                            oninput={{
                                let edit = edit.clone();
                                Callback::from(move |e: InputEvent| {
                                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                                    edit.emit(FieldEdit::PainDetail(area.value()));
                                })
                            }}
                        />
                        <input
                            placeholder="Current tech stack (ELD, fuel cards...)"
                            value={record.tech_stack.clone()}
                            disabled={submitting}
                            oninput={on_text_input(FieldEdit::TechStack)}
                        />
                        <label class="consent-row">
                            <input
                                type="checkbox"
                                checked={record.consent_audit}
                                disabled={submitting}
                                onchange={{
                                    let edit = edit.clone();
                                    Callback::from(move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        edit.emit(FieldEdit::ConsentAudit(input.checked()));
                                    })
                                }}
                            />
                            {"I agree to a review of my fleet's public safety data."}
                        </label>
                        {
                            if let Some(message) = wizard.form_error.as_ref() {
                                html! {
                                    <div class="inline-error">
                                        {message.clone()}
                                        <button class="dismiss-button" onclick={on_dismiss_error.clone()}>{"×"}</button>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <div class="button-row">
                            <button class="lead-back" onclick={on_back.clone()} disabled={submitting}>
                                {"← Back"}
                            </button>
                            <button class="lead-cta green" disabled={submitting}>
                                {
                                    if submitting {
                                        html! { <><span class="spinner"></span>{" Sending..."}</> }
                                    } else {
                                        html! { {"Unlock My Full Report →"} }
                                    }
                                }
                            </button>
                        </div>
                    </form>
                </div>
            }
        }
        Stage::Waitlist => html! {
            <div class="lead-card waitlist">
                <h3>{"Your fleet is under 20 trucks"}</h3>
                <p>
                    {"The guaranteed audit currently requires 20+ active power units. \
                      We've noted your DOT and will reach out when the small-fleet \
                      program opens."}
                </p>
                <button class="lead-cta" onclick={on_waitlist_restart.clone()}>
                    {"Check a different DOT number"}
                </button>
            </div>
        },
        Stage::Success => html! {
            <div class="lead-card success">
                <div class="success-check">{"✓"}</div>
                <h3>{"Report Generating..."}</h3>
                <p>
                    {"We are pulling your full FMCSA inspection history now. Check your \
                      email in 5-10 minutes for your "}
                    <strong>{"Data Risk Snapshot"}</strong>{"."}
                </p>
                {
                    if *show_scheduler {
                        html! {
                            <iframe
                                class="scheduler-embed"
                                src={config::get_scheduler_url()}
                                title="Book your Priority Review Call"
                            />
                        }
                    } else {
                        html! {
                            <button class="lead-cta" onclick={toggle_scheduler.clone()}>
                                {"Book Your Priority Review Call"}
                            </button>
                        }
                    }
                }
                <a href="#" class="restart-link" onclick={on_full_restart.clone()}>
                    {"Run another check"}
                </a>
            </div>
        },
    };

    html! {
        <div class="lead-form">
            <style>
            {r#"
            .lead-card {
                background: #fff;
                color: #0f172a;
                padding: 2rem;
                border-radius: 16px;
                box-shadow: 0 20px 50px rgba(0, 0, 0, 0.25);
                border: 1px solid #e2e8f0;
                max-width: 480px;
                width: 100%;
            }
            .lead-card-header { text-align: center; margin-bottom: 1.5rem; }
            .lead-card-header h3 { font-size: 1.5rem; margin: 0.75rem 0 0.25rem; }
            .lead-card-header p { color: #64748b; font-size: 0.9rem; margin: 0; }
            .free-tool-badge {
                background: #fee2e2;
                color: #b91c1c;
                font-size: 0.7rem;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.05em;
                padding: 0.25rem 0.6rem;
                border-radius: 999px;
            }
            .lead-card form { display: flex; flex-direction: column; gap: 0.75rem; }
            .lead-card input, .lead-card select, .lead-card textarea {
                width: 100%;
                padding: 0.85rem;
                border: 2px solid #e2e8f0;
                border-radius: 8px;
                font-size: 1rem;
                box-sizing: border-box;
            }
            .lead-card input:focus, .lead-card select:focus, .lead-card textarea:focus {
                border-color: #2563eb;
                outline: none;
            }
            .field-label {
                font-size: 0.7rem;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.08em;
                color: #334155;
            }
            .dot-input { font-family: monospace; font-size: 1.15rem; }
            .select-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
            .lead-cta {
                background: #2563eb;
                color: #fff;
                font-weight: 700;
                font-size: 1.05rem;
                padding: 1rem;
                border: none;
                border-radius: 8px;
                cursor: pointer;
                display: flex;
                justify-content: center;
                align-items: center;
                gap: 0.5rem;
            }
            .lead-cta:hover { background: #1d4ed8; }
            .lead-cta:disabled { opacity: 0.7; cursor: wait; }
            .lead-cta.green { background: #16a34a; }
            .lead-cta.green:hover { background: #15803d; }
            .lead-back {
                background: none;
                border: 1px solid #cbd5e1;
                border-radius: 8px;
                padding: 1rem;
                cursor: pointer;
                color: #475569;
            }
            .button-row { display: grid; grid-template-columns: auto 1fr; gap: 0.5rem; }
            .lead-alert, .inline-error {
                background: #fef2f2;
                border: 1px solid #fecaca;
                color: #b91c1c;
                border-radius: 8px;
                padding: 0.75rem;
                font-size: 0.9rem;
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 0.5rem;
                margin-bottom: 0.75rem;
            }
            .dismiss-button {
                background: none;
                border: none;
                color: inherit;
                font-size: 1.1rem;
                cursor: pointer;
            }
            .narrative { text-align: center; margin-bottom: 1rem; padding: 1rem; border-radius: 8px; }
            .narrative.elevated { background: #fef2f2; color: #b91c1c; }
            .narrative.leakage { background: #eff6ff; color: #1d4ed8; }
            .narrative-headline { font-weight: 800; font-size: 1.15rem; }
            .narrative-copy { font-size: 0.85rem; margin: 0.5rem 0 0; }
            .scorecard { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.5rem; margin-bottom: 1rem; }
            .scorecard-tile {
                background: #f8fafc;
                border: 1px solid #e2e8f0;
                border-radius: 8px;
                padding: 0.75rem 0.25rem;
                text-align: center;
                display: flex;
                flex-direction: column;
            }
            .tile-value { font-weight: 800; font-size: 1.2rem; }
            .tile-label { font-size: 0.65rem; color: #64748b; text-transform: uppercase; letter-spacing: 0.05em; }
            .risk-detail {
                background: #f8fafc;
                border: 1px solid #e2e8f0;
                border-radius: 8px;
                padding: 1rem;
                font-size: 0.9rem;
                color: #475569;
                margin-bottom: 1rem;
            }
            .risk-detail p { margin: 0.25rem 0; }
            .oos-value { color: #dc2626; font-weight: 700; }
            .oos-benchmark { color: #94a3b8; font-size: 0.75rem; }
            .flags-tease { font-style: italic; font-size: 0.8rem; color: #64748b; }
            .consent-row {
                display: flex;
                gap: 0.5rem;
                align-items: center;
                font-size: 0.85rem;
                color: #475569;
            }
            .consent-row input { width: auto; }
            .lead-card.waitlist, .lead-card.success { text-align: center; }
            .lead-card.success { background: #f0fdf4; border-color: #bbf7d0; }
            .success-check {
                font-size: 3rem;
                color: #16a34a;
                line-height: 1;
                margin-bottom: 0.5rem;
            }
            .scheduler-embed {
                width: 100%;
                height: 480px;
                border: none;
                border-radius: 8px;
                margin-top: 1rem;
            }
            .restart-link {
                display: inline-block;
                margin-top: 1rem;
                color: #64748b;
                font-size: 0.85rem;
            }
            .spinner {
                display: inline-block;
                width: 16px;
                height: 16px;
                border: 2px solid rgba(255, 255, 255, 0.4);
                border-top-color: #fff;
                border-radius: 50%;
                animation: lead-spin 0.8s linear infinite;
            }
            @keyframes lead-spin { to { transform: rotate(360deg); } }
            "#}
            </style>
            { stage_view }
        </div>
    }
}
