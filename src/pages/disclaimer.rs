use yew::prelude::*;

#[function_component(Disclaimer)]
pub fn disclaimer() -> Html {
    html! {
        <main class="disclaimer-page">
            <style>
            {r#"
            .disclaimer-page { min-height: 100vh; background: #f8fafc; padding: 3rem 1rem; }
            .disclaimer-card {
                max-width: 860px;
                margin: 0 auto;
                background: #fff;
                padding: 2.5rem;
                border-radius: 12px;
                border: 1px solid #e2e8f0;
                box-shadow: 0 10px 25px rgba(0, 0, 0, 0.05);
                color: #0f172a;
            }
            .disclaimer-card h1 { font-size: 1.9rem; margin-bottom: 2rem; }
            .disclaimer-card h2 { font-size: 1.25rem; margin: 2rem 0 1rem; }
            .disclaimer-card p { line-height: 1.7; margin-bottom: 1.5rem; }
            .disclaimer-card ul { padding-left: 1.5rem; margin-bottom: 1.5rem; }
            .disclaimer-card li { margin-bottom: 0.5rem; line-height: 1.6; }
            .disclaimer-footnote {
                margin-top: 2rem;
                padding-top: 2rem;
                border-top: 1px solid #e2e8f0;
                font-size: 0.9rem;
                color: #475569;
            }
            "#}
            </style>
            <div class="disclaimer-card">
                <h1>{"Guarantee & Financial Projections Disclaimer"}</h1>

                <p>
                    {"The Data & AI Clarity Agency (operating as Fleet Clarity) provides a \
                      specialized Fleet Data Audit service. All information provided in the \
                      Instant Risk Check tool, the Video Sales Letter (VSL), and the PDF Risk \
                      Snapshot is based on publicly available FMCSA data and statistical \
                      industry models. These materials are intended for informational and \
                      compliance assessment purposes only and do not constitute financial, \
                      legal, or accounting advice."}
                </p>

                <h2>{"Performance Guarantee Limitations"}</h2>
                <p>
                    {"The $20,000 Savings Guarantee referenced in our marketing materials is \
                      a performance-based warranty that is strictly subject to the terms \
                      outlined in the final Master Service Agreement (MSA) signed upon \
                      engagement. This guarantee is exclusively available to carriers that \
                      meet the following mandatory minimum criteria at the time of the audit:"}
                </p>
                <ul>
                    <li>
                        <strong>{"Fleet Size: "}</strong>
                        {"A minimum of 20 active Power Units (trucks) listed on the \
                          carrier's MCS-150 form."}
                    </li>
                    <li>
                        <strong>{"Data Availability: "}</strong>
                        {"The provision of 12 months of verifiable historical data \
                          (including raw telematics/ELD logs and fuel card transaction \
                          reports) to conduct the forensic analysis."}
                    </li>
                </ul>

                <h2>{"Voiding Conditions & Liability Cap"}</h2>
                <p>
                    {"If these minimum conditions are not met, or if the client fails to \
                      provide access to the required data streams, the $20,000 guarantee is \
                      void. In the event that a qualified audit fails to identify the \
                      promised potential savings, the Company's sole liability is strictly \
                      limited to a full refund of the one-time $2,500 Audit fee."}
                </p>

                <p class="disclaimer-footnote">
                    {"By proceeding with the service, you acknowledge that our findings are a \
                      statistical analysis of financial risk based on the data provided, and \
                      you assume all liability for any operational decisions made based on \
                      our report."}
                </p>
            </div>
        </main>
    }
}
