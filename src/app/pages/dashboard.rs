//! Management dashboard.
//!
//! Loads all six backend aggregates together; if any of them fails the page
//! shows its error state instead of a partial view.

use dioxus::prelude::*;

use crate::app::api::resources::dashboard;
use crate::app::api::DashboardData;
use crate::app::components::Layout;
use crate::app::controller::use_app;
use crate::app::format;
use crate::app::state::Page;

#[component]
pub fn Dashboard() -> Element {
    let mut data = use_resource(|| async { dashboard::load().await });

    let snapshot = data.read().clone();
    let loading = snapshot.is_none();

    let content = match snapshot {
        None => rsx! {
            div { class: "flex justify-center items-center h-32",
                div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-[#FF4293]" }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "bg-red-100 border border-red-400 text-red-700 rounded-xl p-6",
                p { class: "font-semibold mb-2", "Erro ao carregar o painel" }
                p { class: "text-sm", "{err}" }
                button {
                    class: "mt-4 px-4 py-2 text-sm text-white bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg",
                    onclick: move |_| data.restart(),
                    "Tentar novamente"
                }
            }
        },
        Some(Ok(d)) => rsx! {
            DashboardContent { data: d }
        },
    };

    rsx! {
        Layout {
            div { class: "max-w-6xl mx-auto w-full",
                div { class: "flex flex-col md:flex-row md:justify-between md:items-center gap-4 mb-6",
                    h1 { class: "text-2xl md:text-3xl font-bold tracking-tight",
                        "Painel de "
                        span { class: "text-[#FF4293]", "Gerenciamento" }
                    }
                    button {
                        class: "px-4 py-2 text-white bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg disabled:opacity-50 text-sm self-start md:self-auto",
                        disabled: loading,
                        onclick: move |_| data.restart(),
                        "Atualizar"
                    }
                }
                {content}
            }
        }
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> Element {
    let mut app = use_app();
    let last_update = format::to_backend_datetime(chrono::Local::now().naive_local());

    rsx! {
        // Summary cards
        div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4 mb-10",
            StatCard {
                color: "bg-purple-100 text-purple-700",
                emoji: "📊",
                title: "Reservas Ativas",
                value: data.stats.active_reservations,
            }
            StatCard {
                color: "bg-pink-100 text-pink-700",
                emoji: "📅",
                title: "Próximos Check-ins",
                value: data.upcoming_checkins.len() as u64,
            }
            StatCard {
                color: "bg-yellow-100 text-yellow-700",
                emoji: "🛏️",
                title: "Quartos Disponíveis",
                value: data.stats.available_rooms,
            }
            StatCard {
                color: "bg-green-100 text-green-700",
                emoji: "👥",
                title: "Clientes Ativos",
                value: data.active_customers.len() as u64,
            }
        }

        // Quick actions
        h2 { class: "text-lg font-semibold text-zinc-700", "Ações Rápidas" }
        hr { class: "my-4 border-t border-zinc-200" }
        div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4 mb-8",
            button {
                class: "bg-gradient-to-r from-pink-400 to-pink-500 text-white text-sm font-semibold px-4 py-4 rounded-2xl shadow hover:scale-105 transition-transform",
                onclick: move |_| app.navigate(Page::ReservationForm),
                "+ Nova Reserva"
            }
            button {
                class: "bg-gradient-to-r from-purple-200 to-purple-400 text-purple-900 text-sm font-semibold px-4 py-4 rounded-2xl shadow hover:scale-105 transition-transform",
                onclick: move |_| app.navigate(Page::CustomerForm),
                "+ Novo Cliente"
            }
            button {
                class: "bg-gradient-to-r from-orange-200 to-orange-300 text-orange-900 text-sm font-semibold px-4 py-4 rounded-2xl shadow hover:scale-105 transition-transform",
                onclick: move |_| app.navigate(Page::RoomForm),
                "+ Novo Quarto"
            }
            button {
                class: "bg-gradient-to-r from-zinc-100 to-zinc-200 text-zinc-700 text-sm font-semibold px-4 py-4 rounded-2xl shadow hover:scale-105 transition-transform",
                onclick: move |_| app.navigate(Page::ReservationList),
                "Ver Todas as Reservas"
            }
        }

        // Panels
        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6 mb-8",
            div { class: "bg-white rounded-xl shadow p-6",
                h3 { class: "text-lg font-semibold text-zinc-700 mb-4", "Próximos Check-ins (24h)" }
                if data.upcoming_checkins.is_empty() {
                    p { class: "text-zinc-500", "Nenhum check-in nas próximas 24 horas" }
                } else {
                    div { class: "space-y-3",
                        for r in data.upcoming_checkins.iter().take(5) {
                            div { key: "{r.id}", class: "flex justify-between items-center p-3 bg-yellow-50 rounded-lg",
                                div {
                                    p { class: "font-medium",
                                        {r.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("-")}
                                    }
                                    p { class: "text-sm text-zinc-600",
                                        "Quarto "
                                        {r.room.as_ref().map(|q| q.number.as_str()).unwrap_or("-")}
                                    }
                                }
                                p { class: "text-sm font-medium", {format::display_datetime(&r.checkin)} }
                            }
                        }
                    }
                }
            }

            div { class: "bg-white rounded-xl shadow p-6",
                h3 { class: "text-lg font-semibold text-zinc-700 mb-4", "Quartos Disponíveis" }
                if data.available_rooms.is_empty() {
                    p { class: "text-zinc-500", "Nenhum quarto disponível" }
                } else {
                    div { class: "grid grid-cols-2 gap-2",
                        for room in data.available_rooms.iter().take(8) {
                            div { key: "{room.id}", class: "p-2 bg-green-50 rounded text-center",
                                p { class: "font-medium", "Quarto {room.number}" }
                                p { class: "text-xs text-zinc-600", {room.room_type.as_str()} }
                            }
                        }
                    }
                }
            }
        }

        // Recent activity
        h2 { class: "text-lg font-semibold text-zinc-700", "Atividades Recentes" }
        hr { class: "my-4 border-t border-zinc-200" }
        p { class: "text-sm text-zinc-500 mb-4", "Última atualização: {last_update}" }

        div { class: "overflow-x-auto rounded-xl shadow bg-white",
            table { class: "min-w-full text-sm",
                thead { class: "bg-zinc-100 text-zinc-600",
                    tr {
                        th { class: "px-4 py-3 text-left", "Cliente" }
                        th { class: "px-4 py-3 text-left", "Quarto" }
                        th { class: "px-4 py-3 text-left", "Check-in" }
                        th { class: "px-4 py-3 text-left", "Check-out" }
                        th { class: "px-4 py-3 text-left", "Status" }
                        th { class: "px-4 py-3 text-left", "Valor Total" }
                    }
                }
                tbody {
                    if data.recent_activities.is_empty() {
                        tr {
                            td { colspan: "6", class: "px-4 py-8 text-center text-zinc-500",
                                "Nenhuma atividade recente"
                            }
                        }
                    } else {
                        for r in data.recent_activities.iter() {
                            tr { key: "{r.id}", class: "border-t border-zinc-100",
                                td { class: "px-4 py-3 font-medium text-zinc-800",
                                    {r.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("-")}
                                }
                                td { class: "px-4 py-3",
                                    "Quarto "
                                    {r.room.as_ref().map(|q| q.number.as_str()).unwrap_or("-")}
                                }
                                td { class: "px-4 py-3", {format::display_datetime(&r.checkin)} }
                                td { class: "px-4 py-3", {format::display_datetime(&r.checkout)} }
                                td { class: "px-4 py-3",
                                    span {
                                        class: "inline-block px-2 py-1 rounded text-xs font-medium",
                                        class: "{r.status.badge_class()}",
                                        {r.status.label()}
                                    }
                                }
                                td { class: "px-4 py-3 font-medium", {format::currency(r.total_value)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(color: &'static str, emoji: &'static str, title: &'static str, value: u64) -> Element {
    rsx! {
        div { class: "flex flex-col justify-center p-4 rounded-2xl shadow hover:shadow-md transition {color}",
            div { class: "text-2xl mb-2", "{emoji}" }
            p { class: "text-sm text-zinc-700", "{title}" }
            p { class: "text-xl font-bold text-zinc-900", "{value}" }
        }
    }
}
