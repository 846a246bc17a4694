use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer">{ for props.children.iter() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <main class="faq-page">
            <style>
            {r#"
            .faq-page { min-height: 100vh; background: #f8fafc; padding: 5rem 1rem; }
            .faq-container { max-width: 760px; margin: 0 auto; }
            .faq-intro { text-align: center; margin-bottom: 4rem; }
            .faq-intro h1 { font-size: 2.5rem; color: #0f172a; margin-bottom: 1rem; }
            .faq-intro p { font-size: 1.25rem; color: #475569; }
            .faq-item {
                background: #fff;
                border: 1px solid #e2e8f0;
                border-radius: 12px;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.04);
                margin-bottom: 1.5rem;
                overflow: hidden;
            }
            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                background: none;
                border: none;
                padding: 1.5rem;
                font-size: 1.1rem;
                font-weight: 700;
                color: #0f172a;
                cursor: pointer;
                text-align: left;
            }
            .toggle-icon { color: #2563eb; font-size: 1.5rem; }
            .faq-answer { padding: 0 1.5rem 1.5rem; color: #475569; line-height: 1.6; }
            "#}
            </style>
            <div class="faq-container">
                <div class="faq-intro">
                    <h1>{"Frequently Asked Questions"}</h1>
                    <p>{"Common questions about the Fleet Data Audit."}</p>
                </div>

                <FaqItem question="Is my data safe?">
                    <p>
                        {"Yes. We use Read-Only API tokens. We cannot change your data, \
                          only view it. All data is encrypted."}
                    </p>
                </FaqItem>

                <FaqItem question="Do I qualify for the Guarantee?">
                    <p>
                        {"The $20,000 Guarantee applies to fleets with 20+ active trucks \
                          and 12 months of data. Smaller fleets still benefit from the \
                          audit but do not qualify for the cash-back guarantee."}
                    </p>
                </FaqItem>

                <FaqItem question="How long does it take?">
                    <p>
                        {"The automated scan takes 3 to 5 Business Days. Your Priority \
                          Review Call happens as soon as you book it."}
                    </p>
                </FaqItem>
            </div>
        </main>
    }
}
