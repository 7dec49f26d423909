use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::chat::{ChatSession, KeywordMatcher, PendingReplies, Sender};
use crate::config;

const CHATBOT_CSS: &str = r#"
    .chat-launcher {
        position: fixed;
        bottom: 1.5rem;
        right: 1.5rem;
        z-index: 50;
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 50%;
        border: none;
        background: var(--primary);
        color: var(--primary-foreground);
        font-size: 1.5rem;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
        cursor: pointer;
        animation: pop-in 0.4s ease-out 1s both;
    }
    .chat-window {
        position: fixed;
        bottom: 1.5rem;
        right: 1.5rem;
        z-index: 50;
        width: min(24rem, calc(100vw - 3rem));
        background: var(--background);
        border: 1px solid var(--border);
        border-radius: 0.5rem;
        overflow: hidden;
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
        animation: slide-in 0.3s ease-out;
    }
    .chat-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem;
        background: var(--primary);
        color: var(--primary-foreground);
    }
    .chat-header h3 { margin: 0; font-weight: 500; }
    .chat-header button {
        background: none;
        border: none;
        color: inherit;
        cursor: pointer;
        font-size: 1rem;
    }
    .chat-messages {
        height: 20rem;
        overflow-y: auto;
        padding: 1rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .chat-row { display: flex; }
    .chat-row.user { justify-content: flex-end; }
    .chat-row.bot { justify-content: flex-start; }
    .chat-bubble {
        max-width: 80%;
        border-radius: 0.5rem;
        padding: 0.75rem;
        white-space: pre-wrap;
    }
    .chat-row.user .chat-bubble { background: var(--primary); color: var(--primary-foreground); }
    .chat-row.bot .chat-bubble { background: var(--muted); }
    .typing-indicator span {
        display: inline-block;
        width: 6px;
        height: 6px;
        margin: 0 2px;
        border-radius: 50%;
        background: currentColor;
        animation: typing 1s infinite ease-in-out;
    }
    .typing-indicator span:nth-child(2) { animation-delay: 0.15s; }
    .typing-indicator span:nth-child(3) { animation-delay: 0.3s; }
    .chat-input {
        display: flex;
        gap: 0.5rem;
        padding: 0.75rem;
        border-top: 1px solid var(--border);
    }
    .chat-input textarea {
        flex: 1;
        min-height: 2.5rem;
        resize: none;
        font: inherit;
        padding: 0.5rem;
        border-radius: 0.375rem;
        border: 1px solid var(--border);
        background: var(--background);
        color: inherit;
    }
    .chat-input button {
        width: 2.5rem;
        height: 2.5rem;
        border: none;
        border-radius: 0.375rem;
        background: var(--primary);
        color: var(--primary-foreground);
        cursor: pointer;
    }
    @keyframes pop-in { from { opacity: 0; transform: scale(0.8); } to { opacity: 1; transform: scale(1); } }
    @keyframes slide-in { from { opacity: 0; transform: translateY(100px) scale(0.9); } to { opacity: 1; transform: none; } }
    @keyframes typing { 0%, 100% { opacity: 0.3; } 50% { opacity: 1; } }
"#;

#[derive(Properties, PartialEq)]
pub struct ChatbotProps {
    /// Keyword table the assistant answers from.
    #[prop_or_else(|| Rc::new(KeywordMatcher::default()))]
    pub matcher: Rc<KeywordMatcher>,
}

#[function_component]
pub fn Chatbot(props: &ChatbotProps) -> Html {
    let session = use_mut_ref(|| ChatSession::new(props.matcher.clone(), Utc::now()));
    let pending = use_mut_ref(PendingReplies::<Timeout>::new);
    let redraw = use_force_update();
    let is_open = use_state(|| false);
    let input = use_state(String::new);
    let messages_ref = use_node_ref();

    // Unmounting drops every pending reply, which clears its timer.
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let cancelled = pending.borrow_mut().cancel_all();
                    if cancelled > 0 {
                        log::debug!("Dropped {} pending chat replies", cancelled);
                    }
                }
            },
            (),
        );
    }

    let send = {
        let session = session.clone();
        let pending = pending.clone();
        let redraw = redraw.clone();
        let input = input.clone();
        Callback::from(move |_: ()| {
            let Some(reply) = session.borrow_mut().submit(&input, Utc::now()) else {
                return;
            };
            input.set(String::new());
            redraw.force_update();

            let reply_to = reply.reply_to;
            let timeout = {
                let session = session.clone();
                let pending = pending.clone();
                let redraw = redraw.clone();
                Timeout::new(config::get_chat_reply_delay_ms(), move || {
                    session.borrow_mut().deliver(reply, Utc::now());
                    pending.borrow_mut().settle(reply_to);
                    redraw.force_update();
                })
            };
            pending.borrow_mut().track(reply_to, timeout);
        })
    };

    let message_count = session.borrow().transcript().len();
    let awaiting_reply = session.borrow().is_awaiting_reply();

    // Keep the newest message in view
    {
        let messages_ref = messages_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = messages_ref.cast::<HtmlElement>() {
                    element.set_scroll_top(element.scroll_height());
                }
                || ()
            },
            (message_count, awaiting_reply, *is_open),
        );
    }

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };
    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            input.set(textarea.value());
        })
    };
    let onkeydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };
    let onclick_send = send.reform(|_: MouseEvent| ());

    if !*is_open {
        return html! {
            <>
                <style>{CHATBOT_CSS}</style>
                <button class="chat-launcher" aria-label="Open chat" onclick={open}>
                    <i class="fas fa-comment"></i>
                </button>
            </>
        };
    }

    let session = session.borrow();
    html! {
        <>
            <style>{CHATBOT_CSS}</style>
            <div class="chat-window">
                <div class="chat-header">
                    <h3>{"SoftSell Assistant"}</h3>
                    <button aria-label="Close chat" onclick={close}>
                        <i class="fas fa-xmark"></i>
                    </button>
                </div>
                <div class="chat-messages" ref={messages_ref}>
                    { for session.transcript().entries().iter().map(|message| {
                        let row = match message.sender {
                            Sender::User => "user",
                            Sender::Bot => "bot",
                        };
                        html! {
                            <div key={message.id} class={classes!("chat-row", row)}>
                                <div class="chat-bubble">
                                    <p>{message.content.clone()}</p>
                                </div>
                            </div>
                        }
                    }) }
                    if session.is_awaiting_reply() {
                        <div class="chat-row bot">
                            <div class="chat-bubble typing-indicator">
                                <span></span><span></span><span></span>
                            </div>
                        </div>
                    }
                </div>
                <div class="chat-input">
                    <textarea
                        value={(*input).clone()}
                        oninput={oninput}
                        onkeydown={onkeydown}
                        placeholder="Type your message..."
                    />
                    <button aria-label="Send message" onclick={onclick_send}>
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </div>
            </div>
        </>
    }
}
