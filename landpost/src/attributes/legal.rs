use serde::{Deserialize, Serialize};

/// Placeholder for values the registry did not provide.
pub const UNKNOWN: &str = "—";

fn unknown() -> String {
	UNKNOWN.to_string()
}

macro_rules! legal_attributes {
	($($field:ident: $label:tt => $short:tt,)*) => {
		/// Registry extract of a land parcel, keyed by the registry's own labels.
		#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
		pub struct LegalAttributes {
			$(
				#[serde(rename = $label, default = "unknown")]
				pub $field: String,
			)*
		}

		/// [`LegalAttributes`] under short keys, the form that is sent over the wire.
		#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
		pub struct PackedLegalAttributes {
			$(
				#[serde(rename = $short, default = "unknown")]
				pub $field: String,
			)*
		}

		/// `(label, short key)` for every attribute, in wire order.
		pub const KEY_TABLE: &[(&str, &str)] = &[$(($label, $short)),*];

		impl Default for LegalAttributes {
			fn default() -> Self {
				Self { $($field: unknown(),)* }
			}
		}

		impl Default for PackedLegalAttributes {
			fn default() -> Self {
				Self { $($field: unknown(),)* }
			}
		}

		impl From<&LegalAttributes> for PackedLegalAttributes {
			fn from(attrs: &LegalAttributes) -> Self {
				Self { $($field: attrs.$field.clone(),)* }
			}
		}

		impl From<&PackedLegalAttributes> for LegalAttributes {
			fn from(packed: &PackedLegalAttributes) -> Self {
				Self { $($field: packed.$field.clone(),)* }
			}
		}

		impl LegalAttributes {
			/// `(label, value)` pairs in wire order.
			pub fn labeled(&self) -> Vec<(&'static str, &str)> {
				vec![$(($label, self.$field.as_str())),*]
			}
		}
	};
}

legal_attributes! {
	object_type: "Вид объекта недвижимости" => "t",
	parcel_subtype: "Вид земельного участка" => "s",
	registration_date: "Дата постановки на учёт" => "d",
	cadastral_number: "Кадастровый номер" => "cn",
	cadastral_quarter: "Кадастровый квартал" => "q",
	address: "Адрес" => "a",
	specified_area: "Площадь уточненная" => "pu",
	declared_area: "Площадь декларированная" => "pd",
	record_area: "Площадь по записи" => "lra",
	status: "Статус" => "st",
	land_category: "Категория земель" => "cat",
	permitted_use: "Вид разрешенного использования" => "vri",
	ownership_form: "Форма собственности" => "own",
	right_type: "Тип права" => "rt",
	cadastral_cost: "Кадастровая стоимость" => "cost",
	cost_index: "Удельный показатель кадастровой стоимости" => "cidx",
	cost_application_date: "Дата применения КС" => "c_app",
	cost_registration_date: "Дата регистрации КС" => "c_reg",
	cost_determination_date: "Дата определения КС" => "c_det",
	cost_determination_basis: "Основание определения КС" => "c_base",
	dataset_category: "Категория набора" => "catn",
	record_updated: "Дата обновления записи" => "upd",
}

/// Short-keys a registry record. `None` stays `None`: no record is invented for a
/// parcel without registry data.
pub fn pack(attrs: Option<&LegalAttributes>) -> Option<PackedLegalAttributes> {
	attrs.map(PackedLegalAttributes::from)
}

/// Restores the labeled record from its packed form.
pub fn unpack(packed: &PackedLegalAttributes) -> LegalAttributes {
	LegalAttributes::from(packed)
}
