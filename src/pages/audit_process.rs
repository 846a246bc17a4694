use yew::prelude::*;

struct ProcessStep {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Secure Connection",
        description: "We connect to your ELD (Motive/Samsara) and Fuel Cards \
                      (WEX/Comdata) via Read-Only APIs. No hardware installation \
                      required.",
        icon: "🛡",
    },
    ProcessStep {
        title: "Forensic Ingestion",
        description: "Our engine ingests 12 months of historical data, normalizing \
                      thousands of GPS pings and transaction logs.",
        icon: "🗄",
    },
    ProcessStep {
        title: "The Cross-Reference",
        description: "We run proprietary algorithms to match Fuel Location vs. Truck \
                      Location and flag 'Ghost Downtime' patterns.",
        icon: "📍",
    },
    ProcessStep {
        title: "The Findings",
        description: "You receive the Profit Protection Report, detailing exactly how \
                      much money you are losing and where.",
        icon: "📄",
    },
];

#[function_component(AuditProcess)]
pub fn audit_process() -> Html {
    html! {
        <main class="process-page">
            <style>
            {r#"
            .process-page { min-height: 100vh; background: #f8fafc; padding: 5rem 1rem; }
            .process-container { max-width: 1000px; margin: 0 auto; }
            .process-intro { text-align: center; margin-bottom: 4rem; }
            .process-intro h1 { font-size: 2.5rem; color: #0f172a; margin-bottom: 1rem; }
            .process-intro p { font-size: 1.25rem; color: #475569; max-width: 40rem; margin: 0 auto; }
            .process-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 2rem;
            }
            @media (max-width: 768px) { .process-grid { grid-template-columns: 1fr; } }
            .process-card {
                background: #fff;
                padding: 2rem;
                border-radius: 12px;
                border: 1px solid #f1f5f9;
                box-shadow: 0 10px 25px rgba(0, 0, 0, 0.05);
                display: flex;
                gap: 1.5rem;
                align-items: flex-start;
            }
            .process-icon {
                flex-shrink: 0;
                background: #f8fafc;
                border: 1px solid #e2e8f0;
                border-radius: 8px;
                padding: 1rem;
                font-size: 1.75rem;
                line-height: 1;
            }
            .step-index {
                font-size: 0.7rem;
                font-weight: 700;
                color: #94a3b8;
                text-transform: uppercase;
                letter-spacing: 0.08em;
                margin-bottom: 0.25rem;
            }
            .process-card h3 { font-size: 1.25rem; color: #0f172a; margin: 0 0 0.75rem; }
            .process-card p { color: #475569; line-height: 1.6; margin: 0; }
            "#}
            </style>
            <div class="process-container">
                <div class="process-intro">
                    <h1>{"The Audit Process"}</h1>
                    <p>{"How we identify hidden profit leaks without disrupting your operations."}</p>
                </div>
                <div class="process-grid">
                    {
                        STEPS.iter().enumerate().map(|(index, step)| html! {
                            <div class="process-card">
                                <div class="process-icon">{step.icon}</div>
                                <div>
                                    <div class="step-index">{format!("Step {}", index + 1)}</div>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </main>
    }
}
