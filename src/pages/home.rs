use yew::prelude::*;

use crate::config;
use crate::lead::form::LeadForm;

const TELEMATICS_VENDORS: &[&str] = &["Samsara", "Motive", "Geotab", "Omnitracs"];
const DATA_STACK: &[&str] = &["Snowflake", "dbt", "Python", "FMCSA Data"];

struct PainCard {
    title: &'static str,
    copy: &'static str,
    accent: &'static str,
}

const PAIN_CARDS: &[PainCard] = &[
    PainCard {
        title: "Unplanned Downtime",
        copy: "A roadside breakdown costs an average of $448/hour plus towing. \
               Our audit predicts failure patterns before the check engine light \
               comes on.",
        accent: "red",
    },
    PainCard {
        title: "Fuel Fraud & Theft",
        copy: "Are your fuel cards matching your GPS locations? We cross-reference \
               datasets to find the $2k-$10k/month leaks you can't see manually.",
        accent: "orange",
    },
    PainCard {
        title: "True CPM Clarity",
        copy: "Stop guessing your profitability. We merge finance and operations \
               data to give you a precise, real-time Cost Per Mile for every lane.",
        accent: "blue",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="home-page">
            <style>
            {r#"
            .home-page { background: #f8fafc; color: #0f172a; }
            .hero {
                background: #0f172a;
                color: #fff;
                padding: 5rem 1rem 8rem;
            }
            .hero-grid {
                max-width: 1100px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                align-items: center;
            }
            @media (max-width: 900px) { .hero-grid { grid-template-columns: 1fr; } }
            .hero-badge {
                display: inline-block;
                background: rgba(37, 99, 235, 0.2);
                color: #93c5fd;
                border: 1px solid rgba(59, 130, 246, 0.3);
                padding: 0.25rem 0.75rem;
                border-radius: 999px;
                font-size: 0.85rem;
                font-weight: 600;
                margin-bottom: 1.5rem;
            }
            .hero h1 { font-size: 2.6rem; line-height: 1.2; margin: 0 0 1.5rem; }
            .hero h1 .liability { color: #f87171; }
            .hero-subcopy { color: #cbd5e1; font-size: 1.1rem; max-width: 32rem; line-height: 1.6; }
            .trust-signals {
                display: flex;
                flex-wrap: wrap;
                gap: 1.5rem;
                color: #64748b;
                font-size: 0.85rem;
                font-weight: 600;
                margin-top: 2rem;
            }
            .vendor-strip {
                margin-top: 2rem;
                padding-top: 2rem;
                border-top: 1px solid #1e293b;
            }
            .vendor-strip p {
                font-size: 0.7rem;
                color: #64748b;
                text-transform: uppercase;
                letter-spacing: 0.08em;
                font-weight: 600;
            }
            .vendor-strip .vendors {
                display: flex;
                flex-wrap: wrap;
                gap: 1.5rem;
                color: #94a3b8;
                font-weight: 700;
                font-size: 1.1rem;
                opacity: 0.6;
            }
            .testimonial {
                margin-top: 1.5rem;
                background: rgba(30, 41, 59, 0.5);
                border: 1px solid #334155;
                border-radius: 8px;
                padding: 1rem;
            }
            .testimonial .stars { color: #facc15; margin-bottom: 0.5rem; }
            .testimonial .quote { color: #cbd5e1; font-style: italic; font-size: 0.9rem; }
            .testimonial .who { color: #64748b; font-size: 0.75rem; font-weight: 600; margin-top: 0.5rem; }
            .trust-bar {
                background: #f1f5f9;
                border-bottom: 1px solid #e2e8f0;
                padding: 1.5rem 1rem;
                text-align: center;
            }
            .trust-bar p {
                font-size: 0.8rem;
                color: #64748b;
                text-transform: uppercase;
                letter-spacing: 0.08em;
                font-weight: 600;
                margin-bottom: 1rem;
            }
            .trust-bar .stack {
                display: flex;
                justify-content: center;
                gap: 2rem;
                font-weight: 700;
                font-size: 1.2rem;
                color: #334155;
                opacity: 0.5;
            }
            .pain-section { padding: 6rem 1rem; background: #fff; }
            .pain-section h2 { text-align: center; font-size: 2rem; margin-bottom: 4rem; }
            .pain-grid {
                max-width: 1100px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 2rem;
            }
            @media (max-width: 900px) { .pain-grid { grid-template-columns: 1fr; } }
            .pain-card {
                padding: 2rem;
                border: 1px solid #f1f5f9;
                border-radius: 12px;
                box-shadow: 0 10px 25px rgba(0, 0, 0, 0.05);
            }
            .pain-card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; }
            .pain-card p { color: #475569; line-height: 1.6; margin: 0; }
            .pain-card .accent {
                width: 48px;
                height: 6px;
                border-radius: 3px;
                margin-bottom: 1.5rem;
            }
            .accent.red { background: #fecaca; }
            .accent.orange { background: #fed7aa; }
            .accent.blue { background: #bfdbfe; }
            .vsl-section { padding: 4rem 1rem 6rem; text-align: center; }
            .vsl-section h2 { font-size: 2rem; margin-bottom: 2rem; }
            .vsl-embed {
                width: 100%;
                max-width: 840px;
                aspect-ratio: 16 / 9;
                border: none;
                border-radius: 12px;
                box-shadow: 0 20px 50px rgba(0, 0, 0, 0.15);
            }
            "#}
            </style>

            <section class="hero">
                <div class="hero-grid">
                    <div>
                        <span class="hero-badge">{"For Fleets with 20–100 Power Units"}</span>
                        <h1>
                            {"STOP Funding Fleet Failure: Instantly Quantify the Hidden "}
                            <span class="liability">{"$250K Corporate Liability"}</span>
                            {" in Your Operational Data."}
                        </h1>
                        <p class="hero-subcopy">
                            {"Generic telematics stops at data. We deploy proprietary AI \
                              anomaly detection models to expose systemic fraud and \
                              utilization loss, guaranteeing actionable profit recovery."}
                        </p>
                        <div class="trust-signals">
                            <span>{"🔒 AES-256 Encryption"}</span>
                            <span>{"🛡 SOC 2 Architecture"}</span>
                            <span>{"✔ FMCSA Verified"}</span>
                        </div>
                        <div class="vendor-strip">
                            <p>{"Trusted By Fleets Using"}</p>
                            <div class="vendors">
                                { TELEMATICS_VENDORS.iter().map(|v| html! { <span>{*v}</span> }).collect::<Html>() }
                            </div>
                        </div>
                    </div>
                    <div>
                        <LeadForm />
                        <div class="testimonial">
                            <div class="stars">{"★★★★★"}</div>
                            <p class="quote">
                                {"\"We found $80K in fuel fraud within the first week of the \
                                  audit. It paid for itself 10x over.\""}
                            </p>
                            <p class="who">{"— Mike T., Fleet Operations Director"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <div class="trust-bar">
                <p>{"Built on Industrial Data Standards"}</p>
                <div class="stack">
                    { DATA_STACK.iter().map(|s| html! { <span>{*s}</span> }).collect::<Html>() }
                </div>
            </div>

            <section class="pain-section">
                <h2>{"The \"Hidden Cost\" Triad"}</h2>
                <div class="pain-grid">
                    {
                        PAIN_CARDS.iter().map(|card| html! {
                            <div class="pain-card">
                                <div class={classes!("accent", card.accent)}></div>
                                <h3>{card.title}</h3>
                                <p>{card.copy}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="vsl-section">
                <h2>{"See the Audit in Action"}</h2>
                <iframe
                    class="vsl-embed"
                    src={config::get_video_embed_url()}
                    title="Fleet Data Audit overview"
                    allow="autoplay; fullscreen"
                />
            </section>
        </main>
    }
}
